mod components;
mod config;
mod dom_surface;
mod gesture;
mod globals;
mod model;
mod state;
mod storage;
mod surface;
mod util;

use components::app::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
