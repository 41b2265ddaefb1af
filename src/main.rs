mod components;
mod model;
mod storage;
mod timer;
mod util;

use components::app::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
