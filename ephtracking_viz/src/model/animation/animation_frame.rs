use crate::common::*;

use crate::enums::animation_state::*;

use crate::model::temporal::temporal_spec::*;

#[doc = r#"
    Playback position of one animator.

    `index` points at the next year to display. `generation` changes on every
    start, replay and cancel so a timer started earlier can tell it is stale.
"#]
#[derive(Debug, Clone, Getters)]
#[getset(get = "pub")]
pub struct AnimationFrame {
    years: TemporalSpec,
    index: usize,
    state: AnimationState,
    generation: u64,
}

impl AnimationFrame {
    pub fn new(years: TemporalSpec) -> Self {
        AnimationFrame {
            years,
            index: 0,
            state: AnimationState::Idle,
            generation: 0,
        }
    }

    #[doc = "Enters `Running` from the second year, the first one is already on screen"]
    pub fn begin(&mut self) -> u64 {
        self.index = 1;
        self.state = AnimationState::Running;
        self.generation += 1;
        self.generation
    }

    #[doc = r#"
        Rewinds for a replay, returns the first year to draw synchronously.
        `None` once cancelled, a cancelled frame never runs again.
    "#]
    pub fn rewind(&mut self) -> Option<String> {
        if self.state == AnimationState::Cancelled {
            return None;
        }

        self.generation += 1;
        self.index = 1;
        self.state = if self.years.len() > 1 {
            AnimationState::Running
        } else {
            AnimationState::Completed
        };
        Some(self.years.first().to_string())
    }

    pub fn cancel(&mut self) {
        self.generation += 1;
        self.state = AnimationState::Cancelled;
    }

    #[doc = r#"
        Advances one frame when running. Returns the year to display, moving to
        `Completed` once the last year has been handed out.
    "#]
    pub fn step(&mut self) -> Option<String> {
        if self.state != AnimationState::Running {
            return None;
        }

        let year: String = self.years.get(self.index)?.to_string();
        self.index += 1;

        if self.index >= self.years.len() {
            self.state = AnimationState::Completed;
        }

        Some(year)
    }
}
