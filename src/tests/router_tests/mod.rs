mod api_tests;
mod home_tests;
mod redirect_tests;
