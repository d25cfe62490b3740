use actix_web::web;

pub mod check;
pub mod config;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(config::get_config).service(check::check_guess);
}
