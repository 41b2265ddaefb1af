use std::rc::Rc;
use yew::prelude::*;

use super::game::Game;
use crate::model::{Round, RoundAction, RoundConfig, RoundState};
use crate::storage::{self, LocalScoreStore, StoreHandle};

/// Numbers dealt and seconds on the clock, fixed for every round.
const ROUND_CONFIG: RoundConfig = RoundConfig {
    tile_count: 6,
    duration_secs: 20,
};

#[function_component(App)]
pub fn app() -> Html {
    let store = use_memo((), |_| StoreHandle(Rc::new(LocalScoreStore)));
    let round_state =
        use_reducer(|| RoundState::new(ROUND_CONFIG, Round::generate(ROUND_CONFIG)));

    // Load the persisted score record once at mount.
    {
        let round_state = round_state.clone();
        let store = store.clone();
        use_effect_with((), move |_| {
            let scores = storage::load_scores(&*store.0);
            round_state.dispatch(RoundAction::SetScores { scores });
            || ()
        });
    }

    // Round factory: the shell deals every fresh round itself rather than
    // remounting the game with a new identity.
    let on_play_again = {
        let round_state = round_state.clone();
        Callback::from(move |_| {
            round_state.dispatch(RoundAction::NewRound {
                round: Round::generate(ROUND_CONFIG),
                duration_secs: ROUND_CONFIG.duration_secs,
            });
        })
    };

    html! {
        <div style="max-width:480px; margin:40px auto 0; font-family:sans-serif;">
            <Game
                round_state={round_state.clone()}
                store={(*store).clone()}
                on_play_again={on_play_again}
            />
        </div>
    }
}
