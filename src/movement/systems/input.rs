//! Movement domain: input sampling for the player controller.

use bevy::prelude::*;

use crate::movement::MovementInput;

/// Stick deflection needed before the raw horizontal axis reports motion.
const STICK_DEADZONE: f32 = 0.5;

/// Collapse left/right button state into a raw -1/0/1 axis.
pub(crate) fn raw_axis(negative: bool, positive: bool) -> f32 {
    match (negative, positive) {
        (true, false) => -1.0,
        (false, true) => 1.0,
        _ => 0.0,
    }
}

/// Snap an analog value to the raw axis.
pub(crate) fn snap_axis(value: f32) -> f32 {
    if value >= STICK_DEADZONE {
        1.0
    } else if value <= -STICK_DEADZONE {
        -1.0
    } else {
        0.0
    }
}

pub(crate) fn read_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    gamepads: Query<&Gamepad>,
    mut input: ResMut<MovementInput>,
) {
    let left = keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft);
    let right = keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight);
    let mut horizontal = raw_axis(left, right);

    let mut jump_pressed = keyboard.just_pressed(KeyCode::Space)
        || keyboard.just_pressed(KeyCode::KeyW)
        || keyboard.just_pressed(KeyCode::ArrowUp);

    for gamepad in &gamepads {
        if horizontal == 0.0 {
            let dpad = raw_axis(
                gamepad.pressed(GamepadButton::DPadLeft),
                gamepad.pressed(GamepadButton::DPadRight),
            );
            horizontal = if dpad != 0.0 {
                dpad
            } else {
                snap_axis(gamepad.left_stick().x)
            };
        }
        jump_pressed |= gamepad.just_pressed(GamepadButton::South);
    }

    input.horizontal = horizontal;
    input.jump_pressed = jump_pressed;
}
