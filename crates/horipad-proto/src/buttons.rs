/// Number of physical buttons on the pad.
pub const BUTTON_COUNT: usize = 12;

/// Logical buttons of the Fighting Commander.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Up,
    Right,
    Down,
    Left,
    A,
    B,
    X,
    Y,
    L,
    R,
    Start,
    Select,
}

impl Button {
    /// Every button in declaration order. Event emission follows this
    /// order, so it must stay stable.
    pub const ALL: [Button; BUTTON_COUNT] = [
        Button::Up,
        Button::Right,
        Button::Down,
        Button::Left,
        Button::A,
        Button::B,
        Button::X,
        Button::Y,
        Button::L,
        Button::R,
        Button::Start,
        Button::Select,
    ];

    /// Bit(s) of this button in the decoded wire word.
    pub const fn mask(self) -> u16 {
        match self {
            Button::Up => 0x0001,
            Button::Right => 0x8000,
            Button::Down => 0x4000,
            Button::Left => 0x0002,
            Button::A => 0x0010,
            Button::B => 0x0040,
            Button::X => 0x0008,
            Button::Y => 0x0020,
            Button::L => 0x2000,
            Button::R => 0x0200,
            Button::Start => 0x0400,
            Button::Select => 0x1000,
        }
    }

    /// Single-character glyph for the diagnostic display.
    pub const fn glyph(self) -> char {
        match self {
            Button::Up => '^',
            Button::Right => '>',
            Button::Down => 'v',
            Button::Left => '<',
            Button::A => 'A',
            Button::B => 'B',
            Button::X => 'X',
            Button::Y => 'Y',
            Button::L => 'L',
            Button::R => 'R',
            Button::Start => '+',
            Button::Select => '-',
        }
    }
}

/// Edge-tracking state for one button.
///
/// `prev_pressed` reflects the last value actually published to the
/// sink, not the last poll. It is only advanced when a change is
/// emitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonState {
    pub pressed: bool,
    pub prev_pressed: bool,
}

/// Current and last-published state for the whole button set, indexed
/// in `Button::ALL` order.
#[derive(Debug, Clone, Default)]
pub struct ButtonStates([ButtonState; BUTTON_COUNT]);

impl ButtonStates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update every `pressed` flag from a decoded wire word.
    pub fn apply_word(&mut self, word: u16) {
        for (state, button) in self.0.iter_mut().zip(Button::ALL) {
            let mask = button.mask();
            state.pressed = (word & mask) == mask;
        }
    }

    /// Drop all tracking back to the released state.
    pub fn reset(&mut self) {
        self.0 = [ButtonState::default(); BUTTON_COUNT];
    }

    pub fn get(&self, button: Button) -> ButtonState {
        self.0[button as usize]
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Button, &mut ButtonState)> {
        Button::ALL.into_iter().zip(self.0.iter_mut())
    }

    pub fn iter(&self) -> impl Iterator<Item = (Button, ButtonState)> + '_ {
        Button::ALL.into_iter().zip(self.0.iter().copied())
    }
}
