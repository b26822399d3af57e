#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

mod delegate;
mod login;
mod logout;
mod page;

#[cfg(target_arch = "wasm32")]
mod console;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(test)]
mod tests;

#[cfg(target_arch = "wasm32")]
fn main() {
    console::init();
    if let Err(e) = run() {
        log::error!("failed to install auth handlers: {e:#}");
    }
}

#[cfg(target_arch = "wasm32")]
fn run() -> anyhow::Result<()> {
    use std::rc::Rc;

    use portal_api::PortalApi;

    use dom::BrowserPage;
    use login::LoginHandler;
    use logout::LogoutHandler;
    use page::ElementIds;

    let page = Rc::new(BrowserPage);
    let api = PortalApi::new(page.origin()?)?;
    let ids = ElementIds::default();

    dom::install_login(LoginHandler::new(page.clone(), api.clone(), ids.clone()))?;
    dom::install_logout(LogoutHandler::new(page, api, ids))?;
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::error!("web runs in the browser, build it for wasm32-unknown-unknown");
    std::process::exit(1);
}
