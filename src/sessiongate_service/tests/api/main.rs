mod helpers;
mod login;
mod logout;
mod refresher;
mod route_guard;
mod session;
mod set_token;
mod signup;
