//! End-to-end: byte stream in, pin levels out
//!
//! Drives the controller with raw bytes and checks what a full multiplex
//! cycle puts on active-low digit selects and active-high segment lines.

use std::cell::RefCell;
use std::rc::Rc;

use scoreboard_core::display::segments::decode;
use scoreboard_core::{
    Controller, DisplayBuffer, DisplayCell, DisplayLayout, IndicatorOutputs, Indicators,
    Multiplexer, ScoreboardConfig,
};
use scoreboard_hal::{OutputPin, PinBank};
use scoreboard_protocol::{Command, Reply};

/// Pin levels shared with the test body: `levels[bank][line]`
type Levels = Rc<RefCell<Vec<Vec<bool>>>>;

struct SharedPin {
    levels: Levels,
    bank: usize,
    line: usize,
}

impl OutputPin for SharedPin {
    fn set_high(&mut self) {
        self.levels.borrow_mut()[self.bank][self.line] = true;
    }

    fn set_low(&mut self) {
        self.levels.borrow_mut()[self.bank][self.line] = false;
    }

    fn is_set_high(&self) -> bool {
        self.levels.borrow()[self.bank][self.line]
    }
}

const SEGMENTS: usize = 0;
const DIGITS: usize = 1;

fn pins<const N: usize>(levels: &Levels, bank: usize) -> [SharedPin; N] {
    core::array::from_fn(|line| SharedPin {
        levels: levels.clone(),
        bank,
        line,
    })
}

fn bytes(command: Command) -> Vec<u8> {
    command.to_packet().unwrap().encode_to_vec().unwrap().to_vec()
}

/// Run one refresh cycle and return the pattern shown on each digit
fn capture_cycle<S, D>(mux: &mut Multiplexer<'_, S, D>, levels: &Levels) -> Vec<u8>
where
    S: scoreboard_hal::OutputPort,
    D: scoreboard_hal::OutputPort,
{
    let mut shown = vec![0u8; mux.slot_count() as usize];
    for _ in 0..mux.slot_count() {
        mux.tick();

        let levels = levels.borrow();
        let selected: Vec<usize> = levels[DIGITS]
            .iter()
            .enumerate()
            .filter(|&(_, &high)| !high)
            .map(|(line, _)| line)
            .collect();
        assert_eq!(selected.len(), 1, "exactly one digit energized");

        let pattern = levels[SEGMENTS]
            .iter()
            .enumerate()
            .fold(0u8, |acc, (line, &high)| acc | ((high as u8) << line));
        shown[selected[0]] = pattern;
    }
    shown
}

#[test]
fn test_byte_stream_to_digits() {
    let levels: Levels = Rc::new(RefCell::new(vec![vec![false; 7], vec![false; 6]]));
    let cell = DisplayCell::new(DisplayBuffer::EMPTY);
    let config = ScoreboardConfig::DEFAULT;

    let mut controller = Controller::new(&cell, &config);
    let segments = PinBank::active_high(pins::<7>(&levels, SEGMENTS));
    let digits = PinBank::active_low(pins::<6>(&levels, DIGITS));
    let mut mux = Multiplexer::new(&cell, segments, digits, config.layout).unwrap();

    // Noise, then a timer update and a score update
    let mut stream = vec![0x00, 0x13, 0x55];
    stream.extend(bytes(Command::update_timer(1, 7)));
    stream.extend(bytes(Command::update_score(50, 20)));
    for byte in stream {
        assert_eq!(controller.feed(byte), None);
    }

    let shown = capture_cycle(&mut mux, &levels);
    let digits: Vec<u8> = shown.iter().map(|&p| decode(p).unwrap()).collect();
    assert_eq!(digits, [0, 1, 0, 7, 5, 0]);
}

#[test]
fn test_eight_digit_layout_shows_blue() {
    let levels: Levels = Rc::new(RefCell::new(vec![vec![false; 7], vec![false; 8]]));
    let cell = DisplayCell::default();
    let config = ScoreboardConfig {
        layout: DisplayLayout::Eight,
        ..ScoreboardConfig::DEFAULT
    };

    let mut controller = Controller::new(&cell, &config);
    let segments = PinBank::active_high(pins::<7>(&levels, SEGMENTS));
    let digits = PinBank::active_low(pins::<8>(&levels, DIGITS));
    let mut mux = Multiplexer::new(&cell, segments, digits, config.layout).unwrap();

    for byte in bytes(Command::update_score(3, 42)) {
        controller.feed(byte);
    }

    let shown = capture_cycle(&mut mux, &levels);
    let values = cell.load().decode_values().unwrap();
    assert_eq!(values.blue_score, Some(42));
    assert_eq!(decode(shown[6]), Some(4));
    assert_eq!(decode(shown[7]), Some(2));
}

#[test]
fn test_match_flow_and_indicators() {
    let levels: Levels = Rc::new(RefCell::new(vec![vec![false; 2]]));
    let cell = DisplayCell::default();
    let mut controller = Controller::new(&cell, &ScoreboardConfig::DEFAULT);
    let [red, blue] = pins::<2>(&levels, 0);
    let mut indicators = Indicators::new(red, blue);

    // Flags set while idle stay dark
    let mut stream = bytes(Command::SetLed {
        alliance: scoreboard_protocol::Alliance::Red,
        on: true,
    });
    stream.extend(bytes(Command::Ping));
    let mut replies = Vec::new();
    for byte in stream {
        replies.extend(controller.feed(byte));
    }
    assert_eq!(replies, [Reply::Ack]);
    assert_eq!(indicators.apply(controller.state()), IndicatorOutputs::OFF);

    for command in [Command::StartMatch, Command::StopMatch, Command::StartMatch] {
        for byte in bytes(command) {
            controller.feed(byte);
        }
    }
    assert_eq!(
        indicators.apply(controller.state()),
        IndicatorOutputs {
            red: true,
            blue: true
        }
    );
    assert_eq!(*levels.borrow(), vec![vec![true, true]]);

    for byte in [0xAA, 0x05, 0x00, 0x05, 0x55] {
        controller.feed(byte);
    }
    assert_eq!(indicators.apply(controller.state()), IndicatorOutputs::OFF);
    assert_eq!(cell.load(), DisplayBuffer::default());
}
