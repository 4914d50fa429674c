use maud::{html, Markup};

pub fn request_form() -> Markup {
    html! {
        form class="form" id="requestForm" method="post" action="/request" {
            label { "Arrivo" input type="date" name="checkin"; }
            label { "Partenza" input type="date" name="checkout"; }
            label { "Ospiti" input type="number" name="guests" min="1"; }
            label { "Budget" input type="text" name="budget" placeholder="es. 1500 €/settimana"; }
            label { "Note" textarea name="notes" rows="3" {} }
            button type="submit" class="btn btn--wa" { "Invia su WhatsApp" }
        }
    }
}
