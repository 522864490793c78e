//! frame source -> render -> sleep, until told to stop. Then clear the strip and let go of it.
use std::thread::sleep;
use std::time::Duration;

use crate::errors::{StripResult, status_text};
use crate::fps::FpsTracker;
use crate::lights::{FrameSource, clear};
use crate::logging::{error, info, trace, warn};
use crate::session::{DeviceSession, StripDriver};
use crate::stop::StopFlag;

/// Where the loop is after a tick. Returning from [`RunLoop::run`] is the terminated state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Running,
    /// the status is what the process should exit with
    Stopping(StripResult<()>),
}

pub struct RunLoop<'a, S: FrameSource, D: StripDriver> {
    frame_source: S,
    session: DeviceSession<D>,
    stop: &'a StopFlag,
    period: Duration,
    fps: FpsTracker,
}

impl<'a, S: FrameSource, D: StripDriver> RunLoop<'a, S, D> {
    /// The session must already be initialized. The loop owns it from here on and always finalizes it.
    pub fn new(frame_source: S, session: DeviceSession<D>, stop: &'a StopFlag) -> Self {
        let period = frame_source.frame_period();
        let fps = FpsTracker::new(frame_source.name());

        Self {
            frame_source,
            session,
            stop,
            period,
            fps,
        }
    }

    /// Override the frame source's sleep.
    pub fn with_period(mut self, period: Duration) -> Self {
        self.period = period;
        self
    }

    /// Returns the first render error, or `Ok` if we were asked to stop. Cleanup errors are only logged.
    pub fn run(mut self) -> StripResult<()> {
        info!(
            "running {} every {:?}",
            self.frame_source.name(),
            self.period
        );

        let mut state = RunState::Running;

        loop {
            state = match state {
                RunState::Running => self.tick(),
                RunState::Stopping(status) => return self.shutdown(status),
            };
        }
    }

    fn tick(&mut self) -> RunState {
        if self.stop.is_stop_requested() {
            info!("stop requested");
            return RunState::Stopping(Ok(()));
        }

        self.frame_source.next_frame(self.session.frame_mut());

        if let Err(err) = self.session.render() {
            error!("ws2811_render failed: {err}");
            return RunState::Stopping(Err(err));
        }

        trace!("rendered {}", self.frame_source.name());

        self.fps.tick();

        sleep(self.period);

        RunState::Running
    }

    fn shutdown(mut self, status: StripResult<()>) -> StripResult<()> {
        clear(self.session.frame_mut());

        if let Err(err) = self.session.render() {
            // we are exiting anyways. the original status wins
            warn!("clearing the strip failed: {err}");
        }

        self.session.finalize();

        info!("stopped: {}", status_text(status));

        status
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;
    use std::time::Instant;

    use super::*;
    use crate::config::StripConfig;
    use crate::errors::StripError;
    use crate::lights::{AllOn, Bounce, Pixel};

    #[derive(Default)]
    struct Journal {
        frames: Vec<Vec<Pixel>>,
        finalized: usize,
    }

    /// Records every rendered frame. Renders return `results` in order, then `Ok`.
    struct MockStrip {
        leds: Vec<Pixel>,
        results: VecDeque<StripResult<()>>,
        stop_after: Option<(usize, StopFlag)>,
        journal: Rc<RefCell<Journal>>,
    }

    impl StripDriver for MockStrip {
        fn leds_mut(&mut self) -> &mut [Pixel] {
            &mut self.leds
        }

        fn render(&mut self) -> StripResult<()> {
            let mut journal = self.journal.borrow_mut();

            journal.frames.push(self.leds.clone());

            if let Some((n, stop)) = &self.stop_after {
                if journal.frames.len() == *n {
                    // pretend SIGINT arrived while we were rendering
                    stop.request_stop();
                }
            }

            self.results.pop_front().unwrap_or(Ok(()))
        }

        fn finalize(self) {
            self.journal.borrow_mut().finalized += 1;
        }
    }

    fn session(
        results: impl IntoIterator<Item = StripResult<()>>,
        stop_after: Option<(usize, StopFlag)>,
    ) -> (DeviceSession<MockStrip>, Rc<RefCell<Journal>>) {
        let journal = Rc::new(RefCell::new(Journal::default()));

        let driver_journal = journal.clone();
        let session = DeviceSession::initialize(StripConfig::default(), |config| {
            Ok(MockStrip {
                leds: vec![Pixel::BLACK; config.channels[0].count],
                results: results.into_iter().collect(),
                stop_after,
                journal: driver_journal,
            })
        })
        .unwrap();

        (session, journal)
    }

    #[test_log::test]
    fn test_stop_flag_clears_and_finalizes() {
        let stop = StopFlag::new();
        let (session, journal) = session([], Some((3, stop.clone())));

        let status = RunLoop::new(AllOn, session, &stop)
            .with_period(Duration::ZERO)
            .run();

        assert_eq!(status, Ok(()));

        let journal = journal.borrow();

        // 3 patterns and exactly 1 clear
        assert_eq!(journal.frames.len(), 4);
        for frame in &journal.frames[..3] {
            assert!(frame.iter().all(|x| *x == Pixel::WHITE));
        }
        assert!(journal.frames[3].iter().all(|x| x.is_black()));

        assert_eq!(journal.finalized, 1);
    }

    #[test_log::test]
    fn test_stop_before_first_frame() {
        let stop = StopFlag::new();
        stop.request_stop();

        let (session, journal) = session([], None);

        let status = RunLoop::new(Bounce::new(), session, &stop).run();

        assert_eq!(status, Ok(()));

        let journal = journal.borrow();
        assert_eq!(journal.frames.len(), 1);
        assert!(journal.frames[0].iter().all(|x| x.is_black()));
        assert_eq!(journal.finalized, 1);
    }

    #[test_log::test]
    fn test_render_failure_keeps_first_status() {
        let stop = StopFlag::new();

        // second frame fails, then the clearing render fails differently
        let (session, journal) = session(
            [Ok(()), Err(StripError::Dma), Err(StripError::SpiTransfer)],
            None,
        );

        let status = RunLoop::new(Bounce::new(), session, &stop)
            .with_period(Duration::ZERO)
            .run();

        assert_eq!(status, Err(StripError::Dma));

        let journal = journal.borrow();
        assert_eq!(journal.frames.len(), 3);
        assert!(journal.frames[2].iter().all(|x| x.is_black()));
        assert_eq!(journal.finalized, 1);
    }

    #[test_log::test]
    fn test_sleeps_for_the_frame_period() {
        let stop = StopFlag::new();
        let (session, journal) = session([], Some((3, stop.clone())));

        let bounce = Bounce::new();
        let period = bounce.frame_period();

        let start = Instant::now();

        RunLoop::new(bounce, session, &stop).run().unwrap();

        // a sleep after each of the 3 frames. none after the clear
        assert!(start.elapsed() >= period * 3);
        assert_eq!(journal.borrow().frames.len(), 4);
    }

    #[test_log::test]
    fn test_bounce_frames_move() {
        let stop = StopFlag::new();
        let (session, journal) = session([], Some((2, stop.clone())));

        RunLoop::new(Bounce::new(), session, &stop)
            .with_period(Duration::ZERO)
            .run()
            .unwrap();

        let journal = journal.borrow();

        // head 1, then head 2
        assert!(journal.frames[0][0].is_black());
        assert!(!journal.frames[0][1].is_black());
        assert!(journal.frames[1][1].is_black());
        assert!(!journal.frames[1][2].is_black());
    }
}
