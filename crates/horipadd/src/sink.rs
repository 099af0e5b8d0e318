use colored::Colorize;
use evdev::uinput::{VirtualDevice, VirtualDeviceBuilder};
use evdev::{AttributeSet, BusType, EventType, InputEvent, InputId, Key};
use smallvec::SmallVec;

use horipad_link::{EventSink, SinkError};
use horipad_proto::{Button, BUTTON_COUNT};

use crate::print_debug;

const DEVICE_NAME: &str = "Hori I2C Fighting Commander";
const VENDOR_ID: u16 = 0x24C6;
const PRODUCT_ID: u16 = 0x5510;

/// uinput key code for each logical button.
fn key_code(button: Button) -> Key {
    match button {
        Button::Up => Key::BTN_DPAD_UP,
        Button::Right => Key::BTN_DPAD_RIGHT,
        Button::Down => Key::BTN_DPAD_DOWN,
        Button::Left => Key::BTN_DPAD_LEFT,
        Button::A => Key::BTN_SOUTH,
        Button::B => Key::BTN_EAST,
        Button::X => Key::BTN_NORTH,
        Button::Y => Key::BTN_WEST,
        Button::L => Key::BTN_TL,
        Button::R => Key::BTN_TR,
        Button::Start => Key::BTN_START,
        Button::Select => Key::BTN_SELECT,
    }
}

/// Virtual gamepad that batches key events until the sync marker.
pub(crate) struct UinputSink {
    device: VirtualDevice,
    pending: SmallVec<[InputEvent; BUTTON_COUNT]>,
    show_buttons: bool,
    held: u16,
}

impl UinputSink {
    /// Register the virtual device with the 12 button codes.
    /// The kernel node is released when the sink is dropped.
    pub fn create(show_buttons: bool) -> std::io::Result<Self> {
        let mut keys = AttributeSet::<Key>::new();
        for button in Button::ALL {
            keys.insert(key_code(button));
        }
        let device = VirtualDeviceBuilder::new()?
            .name(DEVICE_NAME)
            .input_id(InputId::new(BusType::BUS_USB, VENDOR_ID, PRODUCT_ID, 1))
            .with_keys(&keys)?
            .build()?;
        Ok(Self {
            device,
            pending: SmallVec::new(),
            show_buttons,
            held: 0,
        })
    }

    /// Held buttons as a glyph row, highest mask bit first.
    fn glyph_row(&self) -> String {
        Button::ALL
            .iter()
            .rev()
            .map(|b| if self.held & b.mask() != 0 { b.glyph() } else { ' ' })
            .collect()
    }
}

impl EventSink for UinputSink {
    fn emit_key(&mut self, button: Button, pressed: bool) -> Result<(), SinkError> {
        if pressed {
            self.held |= button.mask();
        } else {
            self.held &= !button.mask();
        }
        self.pending.push(InputEvent::new(
            EventType::KEY,
            key_code(button).code(),
            i32::from(pressed),
        ));
        Ok(())
    }

    fn emit_sync(&mut self) -> Result<(), SinkError> {
        // evdev terminates the written batch with a SYN_REPORT, which
        // is exactly the sync marker.
        let result = self.device.emit(&self.pending);
        self.pending.clear();
        result.map_err(|e| SinkError::Emit(e.to_string()))?;
        if self.show_buttons {
            print_debug!("buttons: [{}]", self.glyph_row());
        }
        Ok(())
    }
}
