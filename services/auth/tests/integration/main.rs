mod helpers;
mod login_test;
mod session_http_test;
