use particles_core::ShapeKind;

/// What a key press asks the scene to do.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum UiCommand {
    SelectShape(ShapeKind),
    NextShape,
    SelectColor(usize),
    ToggleTracking,
    ToggleFullscreen,
    ToggleTwoHands,
    Quit,
}

#[inline]
pub fn shape_for_digit(key: &str) -> Option<ShapeKind> {
    match key {
        "1" => Some(ShapeKind::ALL[0]),
        "2" => Some(ShapeKind::ALL[1]),
        "3" => Some(ShapeKind::ALL[2]),
        "4" => Some(ShapeKind::ALL[3]),
        "5" => Some(ShapeKind::ALL[4]),
        _ => None,
    }
}

// top letter row, left to right, picks palette entries in display order
#[inline]
pub fn palette_slot_for_key(key: &str) -> Option<usize> {
    match key {
        "q" | "Q" => Some(0),
        "w" | "W" => Some(1),
        "e" | "E" => Some(2),
        "r" | "R" => Some(3),
        "t" | "T" => Some(4),
        "y" | "Y" => Some(5),
        _ => None,
    }
}

/// Map a key name (`"a"`, `"Tab"`, `"Escape"`, ...) to a command.
pub fn command_for_key(key: &str) -> Option<UiCommand> {
    if let Some(shape) = shape_for_digit(key) {
        return Some(UiCommand::SelectShape(shape));
    }
    if let Some(slot) = palette_slot_for_key(key) {
        return Some(UiCommand::SelectColor(slot));
    }
    match key {
        "Tab" => Some(UiCommand::NextShape),
        "g" | "G" => Some(UiCommand::ToggleTracking),
        "f" | "F" => Some(UiCommand::ToggleFullscreen),
        "m" | "M" => Some(UiCommand::ToggleTwoHands),
        "Escape" => Some(UiCommand::Quit),
        _ => None,
    }
}
