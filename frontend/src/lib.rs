use log::{debug, info};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsValue;
use yew::prelude::*;

use crate::components::footer::Footer;
use crate::components::nav::Nav;
use crate::pages::dashboard::Dashboard;

pub mod api;
pub mod components;
pub mod config;
pub mod state;
pub mod pages {
    pub mod dashboard;
}

#[function_component(App)]
fn app() -> Html {
    debug!("App component rendering");
    html! {
        <div class="min-h-screen bg-gray-100 flex flex-col">
            <Nav />
            <main class="flex-1">
                <Dashboard />
            </main>
            <Footer />
        </div>
    }
}

#[wasm_bindgen]
pub async fn run_app() -> Result<(), JsValue> {
    info!("Initializing application...");

    // Initialize logging
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    info!("Logger initialized");

    // Set up panic hook
    console_error_panic_hook::set_once();
    info!("Panic hook set");

    // Mount the app
    info!("Mounting application to #app");
    yew::Renderer::<App>::new().render();
    info!("Application mounted");

    Ok(())
}

// Add a start function that Trunk can call
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    wasm_bindgen_futures::spawn_local(async {
        run_app().await.expect("Failed to run app");
    });
    Ok(())
}
