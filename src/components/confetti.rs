use yew::prelude::*;

const PIECE_COUNT: usize = 200;
const COLORS: [&str; 5] = ["#f85149", "#2ea043", "#58a6ff", "#d4af37", "#ff66ff"];

#[derive(Properties, PartialEq, Clone)]
pub struct ConfettiBurstProps {
    pub active: bool,
}

/// Display-only celebration overlay; holds no game state.
#[function_component(ConfettiBurst)]
pub fn confetti_burst(props: &ConfettiBurstProps) -> Html {
    if !props.active {
        return html! {};
    }
    let pieces = (0..PIECE_COUNT)
        .map(|i| {
            let left = js_sys::Math::random() * 100.0;
            let delay = js_sys::Math::random() * 1.5;
            let spin = (js_sys::Math::random() * 360.0).floor();
            let color = COLORS[i % COLORS.len()];
            html! {
                <span style={format!(
                    "position:absolute; top:-12px; left:{left:.1}%; width:8px; height:12px; background:{color}; transform:rotate({spin}deg); animation:confetti-fall 2.5s linear {delay:.2}s forwards;"
                )}></span>
            }
        })
        .collect::<Html>();
    html! {
        <div style="position:fixed; inset:0; overflow:hidden; pointer-events:none;">
            <style>{"@keyframes confetti-fall { to { transform: translateY(105vh) rotate(720deg); } }"}</style>
            { pieces }
        </div>
    }
}
