use yew::prelude::*;

use super::confetti::ConfettiBurst;
use super::number_tile::NumberTile;
use super::score_panel::ScorePanel;
use crate::model::{RoundAction, RoundState, Status};
use crate::storage::{self, StoreHandle};
use crate::timer::Countdown;
use crate::util::{clog, format_time};

#[derive(Properties, PartialEq, Clone)]
pub struct GameProps {
    pub round_state: UseReducerHandle<RoundState>,
    pub store: StoreHandle,
    pub on_play_again: Callback<()>,
}

#[function_component(Game)]
pub fn game(props: &GameProps) -> Html {
    // Countdown lifecycle. Keyed on the round id and on whether the round is
    // still live: the destructor drops (and thereby cancels) the old handle
    // before a new one starts, and a terminal transition stops it in the
    // same effect cycle. Late ticks are additionally no-ops in the reducer.
    {
        let round_state = props.round_state.clone();
        let key = (
            props.round_state.round_id,
            props.round_state.status == Status::Playing,
        );
        use_effect_with(key, move |&(_, playing)| {
            let countdown = if playing {
                let round_state = round_state.clone();
                Countdown::start(Callback::from(move |_| {
                    round_state.dispatch(RoundAction::Tick)
                }))
            } else {
                None
            };
            move || drop(countdown)
        });
    }

    // Persist the score record once per won round. The reducer has already
    // updated the in-memory record, so a failed write only costs a log line.
    {
        let store = props.store.clone();
        let scores = props.round_state.scores;
        let key = (props.round_state.round_id, props.round_state.status);
        use_effect_with(key, move |&(_, status)| {
            if status == Status::Won {
                if let Err(err) = storage::persist_win(&*store.0, scores) {
                    clog(&format!("{err}"));
                }
            }
            || ()
        });
    }

    let select_number = {
        let round_state = props.round_state.clone();
        Callback::from(move |index: usize| {
            round_state.dispatch(RoundAction::SelectTile { index })
        })
    };

    let play_again = {
        let cb = props.on_play_again.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    // Wipes the whole stored record, high score included, then asks the
    // shell for a fresh round.
    let reset_game = {
        let store = props.store.clone();
        let round_state = props.round_state.clone();
        let cb = props.on_play_again.clone();
        Callback::from(move |_: MouseEvent| {
            if let Err(err) = storage::wipe_scores(&*store.0) {
                clog(&format!("{err}"));
            }
            round_state.dispatch(RoundAction::ResetScores);
            cb.emit(());
        })
    };

    let state = &*props.round_state;
    let status = state.status;
    let target_style = match status {
        Status::Playing => "background:#d2edff; color:#007bff;",
        Status::Won => "background:#2ea043; color:white;",
        Status::Lost => "background:#f85149; color:white;",
    };

    let tiles = state
        .round
        .display
        .iter()
        .enumerate()
        .map(|(i, &number)| {
            html! {
                <NumberTile
                    key={i}
                    id={i}
                    number={number}
                    is_selected={state.is_selected(i) || status.is_terminal()}
                    on_press={select_number.clone()}
                />
            }
        })
        .collect::<Html>();

    html! {
        <div style="display:flex; flex-direction:column;">
            <div style="align-self:center; margin:20px 0 10px; padding:6px 16px; background:#f85149; color:white; border-radius:4px; font-variant-numeric:tabular-nums;">
                { format_time(state.remaining_secs as u64) }
            </div>
            <div style={format!("font-size:40px; font-weight:600; text-align:center; margin:0 50px; padding:20px 0; border-radius:10px; {target_style}")}>
                { state.round.target }
            </div>
            <div style="display:flex; flex-wrap:wrap; justify-content:space-between; padding:10px 50px;">
                { tiles }
            </div>
            { if status.is_terminal() {
                html! {
                    <button onclick={play_again} style="align-self:center; margin:10px 0; padding:8px 24px; font-size:16px; color:#007bff; background:white; border:1px solid #007bff; border-radius:5px;">
                        {"Play Again"}
                    </button>
                }
            } else {
                html! {}
            } }
            <ScorePanel score={state.scores.score} high_score={state.scores.high_score} />
            <button onclick={reset_game} style="align-self:center; margin-bottom:20px; padding:6px 18px; font-size:14px; border:1px solid #30363d; border-radius:5px; background:white;">
                {"Reset Game"}
            </button>
            <ConfettiBurst active={status == Status::Won} />
        </div>
    }
}
