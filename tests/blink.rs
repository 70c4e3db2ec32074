mod tests {
    use aura_led::blink::{BlinkScheduler, BlinkTimings, run_fixed_cycles};
    use aura_led::{ByteSink, Color, Duration, Instant, LedPort, Waiter};

    const MODE_ON: u8 = 0x03;
    const MODE_OFF: u8 = 0x04;

    #[derive(Default)]
    struct RecordingSink {
        frames: heapless::Vec<[u8; 16], 32>,
    }

    impl ByteSink for RecordingSink {
        fn write(&mut self, bytes: &[u8]) {
            let mut frame = [0u8; 16];
            frame.copy_from_slice(bytes);
            self.frames.push(frame).unwrap();
        }
    }

    #[derive(Default)]
    struct RecordingWaiter {
        waits: heapless::Vec<Duration, 32>,
    }

    impl Waiter for RecordingWaiter {
        fn wait(&mut self, duration: Duration) {
            self.waits.push(duration).unwrap();
        }
    }

    fn timings() -> BlinkTimings {
        BlinkTimings::new(Duration::from_millis(100), Duration::from_millis(50))
    }

    fn sent_modes(port: &LedPort<RecordingSink>) -> heapless::Vec<u8, 32> {
        port.sink()
            .unwrap()
            .frames
            .iter()
            .map(|frame| frame[10])
            .collect()
    }

    #[test]
    fn test_start_sends_color_immediately() {
        let mut port = LedPort::attached(RecordingSink::default());
        let mut blink = BlinkScheduler::new();
        assert!(!blink.is_active());

        blink.start(&mut port, Color::RED, timings(), Instant::from_millis(0));
        assert!(blink.is_active());

        let frames = &port.sink().unwrap().frames;
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0][10..14], [MODE_ON, 0x04, 0x04, 0x00]);
    }

    #[test]
    fn test_poll_holds_until_on_interval_elapses() {
        let mut port = LedPort::attached(RecordingSink::default());
        let mut blink = BlinkScheduler::new();
        blink.start(&mut port, Color::BLUE, timings(), Instant::from_millis(0));

        blink.poll(&mut port, Instant::from_millis(0));
        blink.poll(&mut port, Instant::from_millis(99));
        assert_eq!(port.sink().unwrap().frames.len(), 1);

        blink.poll(&mut port, Instant::from_millis(100));
        let frames = &port.sink().unwrap().frames;
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[1][10], MODE_OFF);
    }

    #[test]
    fn test_poll_is_idempotent_within_a_phase() {
        let mut port = LedPort::attached(RecordingSink::default());
        let mut blink = BlinkScheduler::new();
        blink.start(&mut port, Color::BLUE, timings(), Instant::from_millis(0));
        blink.poll(&mut port, Instant::from_millis(100));

        // Off phase runs 50ms from the transition; nothing fires before it.
        blink.poll(&mut port, Instant::from_millis(120));
        blink.poll(&mut port, Instant::from_millis(130));
        blink.poll(&mut port, Instant::from_millis(149));
        assert_eq!(port.sink().unwrap().frames.len(), 2);

        blink.poll(&mut port, Instant::from_millis(150));
        assert_eq!(sent_modes(&port)[..], [MODE_ON, MODE_OFF, MODE_ON]);
    }

    #[test]
    fn test_starved_poll_absorbs_backlog() {
        let mut port = LedPort::attached(RecordingSink::default());
        let mut blink = BlinkScheduler::new();
        blink.start(&mut port, Color::GREEN, timings(), Instant::from_millis(0));

        // Many intervals elapsed, but a single poll flips at most one phase.
        blink.poll(&mut port, Instant::from_millis(1000));
        assert_eq!(port.sink().unwrap().frames.len(), 2);

        // The surplus was absorbed: the off phase restarts at t=1000.
        blink.poll(&mut port, Instant::from_millis(1049));
        assert_eq!(port.sink().unwrap().frames.len(), 2);
        blink.poll(&mut port, Instant::from_millis(1050));
        assert_eq!(sent_modes(&port)[..], [MODE_ON, MODE_OFF, MODE_ON]);
    }

    #[test]
    fn test_restart_resets_the_cycle() {
        let mut port = LedPort::attached(RecordingSink::default());
        let mut blink = BlinkScheduler::new();
        blink.start(&mut port, Color::RED, timings(), Instant::from_millis(0));
        blink.poll(&mut port, Instant::from_millis(100));

        // Restart mid-off-phase: back to On with a fresh phase start.
        blink.start(&mut port, Color::WHITE, timings(), Instant::from_millis(110));
        blink.poll(&mut port, Instant::from_millis(209));
        assert_eq!(port.sink().unwrap().frames.len(), 3);
        blink.poll(&mut port, Instant::from_millis(210));
        assert_eq!(sent_modes(&port)[..], [MODE_ON, MODE_OFF, MODE_ON, MODE_OFF]);
    }

    #[test]
    fn test_stop_sends_off_and_goes_idle() {
        let mut port = LedPort::attached(RecordingSink::default());
        let mut blink = BlinkScheduler::new();
        blink.start(&mut port, Color::CYAN, timings(), Instant::from_millis(0));

        blink.stop(&mut port);
        assert!(!blink.is_active());
        assert_eq!(sent_modes(&port)[..], [MODE_ON, MODE_OFF]);

        // Polls after stop are no-ops until the next start.
        blink.poll(&mut port, Instant::from_millis(500));
        blink.poll(&mut port, Instant::from_millis(1000));
        assert_eq!(port.sink().unwrap().frames.len(), 2);
    }

    #[test]
    fn test_stop_is_safe_when_idle() {
        let mut port = LedPort::attached(RecordingSink::default());
        let mut blink = BlinkScheduler::new();

        blink.stop(&mut port);
        assert!(!blink.is_active());
        assert_eq!(sent_modes(&port)[..], [MODE_OFF]);
    }

    #[test]
    fn test_run_fixed_cycles_alternates_starting_with_on() {
        let mut port = LedPort::attached(RecordingSink::default());
        let mut waiter = RecordingWaiter::default();
        let timings = BlinkTimings::new(Duration::from_millis(10), Duration::from_millis(20));

        run_fixed_cycles(&mut port, &mut waiter, Color::GREEN, timings, 3);

        assert_eq!(
            sent_modes(&port)[..],
            [MODE_ON, MODE_OFF, MODE_ON, MODE_OFF, MODE_ON, MODE_OFF]
        );
        assert_eq!(
            waiter.waits[..],
            [
                Duration::from_millis(10),
                Duration::from_millis(20),
                Duration::from_millis(10),
                Duration::from_millis(20),
                Duration::from_millis(10),
                Duration::from_millis(20),
            ]
        );
    }

    #[test]
    fn test_run_fixed_cycles_zero_does_nothing() {
        let mut port = LedPort::attached(RecordingSink::default());
        let mut waiter = RecordingWaiter::default();

        run_fixed_cycles(&mut port, &mut waiter, Color::GREEN, timings(), 0);
        assert!(port.sink().unwrap().frames.is_empty());
        assert!(waiter.waits.is_empty());
    }
}
