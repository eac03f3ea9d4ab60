use bevy::{
    prelude::*,
    window::{CursorGrabMode, CursorOptions, PrimaryWindow, WindowFocused},
};

pub(super) fn plugin(app: &mut App) {
    app.add_systems(Startup, lock_cursor);
    app.add_systems(Update, (toggle_lock, release_on_focus_lost));
}

fn set_locked(options: &mut CursorOptions, locked: bool) {
    options.grab_mode = if locked {
        CursorGrabMode::Locked
    } else {
        CursorGrabMode::None
    };
    options.visible = !locked;
}

fn lock_cursor(mut options: Single<&mut CursorOptions, With<PrimaryWindow>>) {
    set_locked(&mut options, true);
}

// Escape frees the mouse, a left click grabs it again.
fn toggle_lock(
    keys: Res<ButtonInput<KeyCode>>,
    mb: Res<ButtonInput<MouseButton>>,
    mut options: Single<&mut CursorOptions, With<PrimaryWindow>>,
) {
    if keys.just_pressed(KeyCode::Escape) {
        set_locked(&mut options, false);
    } else if mb.just_pressed(MouseButton::Left) {
        set_locked(&mut options, true);
    }
}

fn release_on_focus_lost(
    mut messages: MessageReader<WindowFocused>,
    mut options: Single<&mut CursorOptions, With<PrimaryWindow>>,
) {
    for message in messages.read() {
        if !message.focused {
            set_locked(&mut options, false);
        }
    }
}
