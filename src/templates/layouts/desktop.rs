use maud::{html, Markup, DOCTYPE};

/// Page shell: head, header nav, footer with the WhatsApp links and year.
pub fn desktop_layout(title: &str, year: i32, wa_link: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="it" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="icon" href="/static/favicon/favicon.ico";
                link rel="stylesheet" href="/static/styles.css";
            }
            body {
                header class="topbar" {
                    a class="brand" href="/" { "Case Gallipoli" }
                    nav {
                        ul {
                            li { a href="/#fasce" { "Fasce" } }
                            li { a href="/#case" { "Case" } }
                            li { a href="/#richiesta" { "Richiesta" } }
                        }
                    }
                }

                (content)

                footer class="footer" {
                    p {
                        "© " span id="year" { (year) } " Case Gallipoli · "
                        a id="waFooter" href=(wa_link) target="_blank" rel="noopener" { "WhatsApp" }
                    }
                }

                a class="wa-fab" id="waFab" href=(wa_link) target="_blank" rel="noopener"
                    aria-label="Scrivici su WhatsApp"
                {
                    "WhatsApp"
                }
            }
        }
    }
}
