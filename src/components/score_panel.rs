use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ScorePanelProps {
    pub score: u32,
    pub high_score: u32,
}

#[function_component(ScorePanel)]
pub fn score_panel(props: &ScorePanelProps) -> Html {
    let value_style = "font-size:30px; font-weight:600; text-align:center; font-variant-numeric:tabular-nums;";
    html! {
        <div style="display:flex; justify-content:space-around; align-items:center; padding:20px;">
            <div>
                <div>{"Your Score"}</div>
                <div style={value_style}>{ props.score }</div>
            </div>
            <div>
                <div>{"High Score"}</div>
                <div style={value_style}>{ props.high_score }</div>
            </div>
        </div>
    }
}
