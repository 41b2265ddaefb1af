use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct NumberTileProps {
    pub id: usize,
    pub number: u32,
    pub is_selected: bool,
    pub on_press: Callback<usize>,
}

#[function_component(NumberTile)]
pub fn number_tile(props: &NumberTileProps) -> Html {
    let press = {
        let on_press = props.on_press.clone();
        let id = props.id;
        let taken = props.is_selected;
        Callback::from(move |_: MouseEvent| {
            // Spent tiles (and every tile of a finished round) stop reporting
            // taps; the reducer guards again behind this.
            if taken {
                return;
            }
            on_press.emit(id);
        })
    };
    let background = if props.is_selected { "#d2edff" } else { "#007bff" };
    html! {
        <button
            onclick={press}
            style={format!("width:30%; margin:10px 0; padding:28px 0; border:none; border-radius:5px; color:white; font-size:25px; font-weight:bold; background:{};", background)}
        >
            { props.number }
        </button>
    }
}
