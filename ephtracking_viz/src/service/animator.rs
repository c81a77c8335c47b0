use crate::common::*;

use crate::enums::animation_state::*;

use crate::model::{animation::animation_frame::*, temporal::temporal_spec::*};

pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(1500);

/* per-frame update of the owning chart, called with the year to display */
pub type FrameCallback = Arc<dyn Fn(&str) + Send + Sync>;

fn lock_frame(frame: &Mutex<AnimationFrame>) -> std::sync::MutexGuard<'_, AnimationFrame> {
    match frame.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

#[doc = r#"
    Runs one frame step for the timer of `generation`.
    The callback runs under the frame lock, so frames never overlap and nothing is
    drawn once `cancel` or `replay` has returned.

    # Returns
    * `bool` - whether this timer should keep ticking
"#]
fn advance_frame(frame: &Mutex<AnimationFrame>, on_frame: &FrameCallback, generation: u64) -> bool {
    let mut guard = lock_frame(frame);

    if *guard.generation() != generation {
        return false;
    }

    if let Some(year) = guard.step() {
        on_frame(&year);
    }

    *guard.state() == AnimationState::Running
}

#[doc = r#"
    Steps a chart through the years of its temporal spec on a fixed cadence.

    State machine: `Idle -> Running -> Completed | Cancelled`, `Completed -> Running`
    through `replay`. The initial render already shows the first year, so playback
    starts from the second one. At most one timer task exists per animator; dropping
    the animator stops it.
"#]
pub struct Animator {
    frame: Arc<Mutex<AnimationFrame>>,
    on_frame: FrameCallback,
    interval: Duration,
    timer: Option<JoinHandle<()>>,
}

impl fmt::Debug for Animator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Animator")
            .field("frame", &*lock_frame(&self.frame))
            .field("interval", &self.interval)
            .field("timer", &self.timer.is_some())
            .finish()
    }
}

impl Animator {
    pub fn new(years: TemporalSpec, on_frame: FrameCallback, interval: Duration) -> Self {
        Animator {
            frame: Arc::new(Mutex::new(AnimationFrame::new(years))),
            on_frame,
            interval,
            timer: None,
        }
    }

    pub fn state(&self) -> AnimationState {
        *lock_frame(&self.frame).state()
    }

    #[doc = "Index of the next year to display"]
    pub fn current_index(&self) -> usize {
        *lock_frame(&self.frame).index()
    }

    pub fn has_timer(&self) -> bool {
        self.timer.as_ref().is_some_and(|timer| !timer.is_finished())
    }

    #[doc = "Replay is offered once the sequence has played out"]
    pub fn can_replay(&self) -> bool {
        self.state() == AnimationState::Completed
    }

    #[doc = r#"
        Starts playback from the second year. A single-year spec is a no-op: no timer
        is created and the callback is never invoked.
        Must be called from within a tokio runtime.
    "#]
    pub fn start(&mut self) {
        {
            let frame = lock_frame(&self.frame);

            if *frame.state() == AnimationState::Cancelled {
                debug!("[Animator->start] animator was cancelled, ignoring start");
                return;
            }

            if frame.years().len() <= 1 {
                debug!("[Animator->start] single year, nothing to animate");
                return;
            }
        }

        self.stop_timer();
        let generation: u64 = lock_frame(&self.frame).begin();
        self.spawn_timer(generation);
    }

    #[doc = r#"
        Restarts from frame zero: cancels a running timer, draws the first year
        synchronously and resumes the cadence from the second year.
        A cancelled animator stays cancelled and draws nothing.
    "#]
    pub fn replay(&mut self) {
        if self.state() == AnimationState::Cancelled {
            debug!("[Animator->replay] animator was cancelled, ignoring replay");
            return;
        }

        self.stop_timer();

        let (generation, state) = {
            let mut guard = lock_frame(&self.frame);

            let Some(first_year) = guard.rewind() else {
                return;
            };
            (self.on_frame)(&first_year);
            (*guard.generation(), *guard.state())
        };

        if state == AnimationState::Running {
            self.spawn_timer(generation);
        }
    }

    #[doc = "Stops playback for good, no callback runs after this returns"]
    pub fn cancel(&mut self) {
        lock_frame(&self.frame).cancel();
        self.stop_timer();
    }

    #[doc = r#"
        Performs one frame step right away, as if the timer had fired.

        # Returns
        * `AnimationState` - the state after the step
    "#]
    pub fn tick(&self) -> AnimationState {
        let generation: u64 = *lock_frame(&self.frame).generation();
        advance_frame(&self.frame, &self.on_frame, generation);
        self.state()
    }

    #[doc = "Waits until the running timer task has ended (completed or cancelled)"]
    pub async fn wait(&mut self) {
        if let Some(timer) = self.timer.take() {
            if let Err(e) = timer.await {
                if !e.is_cancelled() {
                    error!("[Animator->wait] animation timer failed: {:?}", e);
                }
            }
        }
    }

    fn spawn_timer(&mut self, generation: u64) {
        let frame: Arc<Mutex<AnimationFrame>> = Arc::clone(&self.frame);
        let on_frame: FrameCallback = Arc::clone(&self.on_frame);
        let period: Duration = self.interval;

        self.timer = Some(tokio::spawn(async move {
            /* first tick one period after start, the first frame is already drawn */
            let mut ticker: Interval = interval_at(Instant::now() + period, period);

            loop {
                ticker.tick().await;

                if !advance_frame(&frame, &on_frame, generation) {
                    break;
                }
            }
        }));
    }

    fn stop_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

impl Drop for Animator {
    fn drop(&mut self) {
        self.stop_timer();
    }
}
