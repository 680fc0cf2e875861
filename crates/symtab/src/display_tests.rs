use crate::{Enumeration, NameDisplay};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Enumeration)]
#[repr(i32)]
enum Color {
    Red,
    Green,
    Blue,
}

#[test]
fn name_styles() {
    assert_eq!(Color::Red.display().to_string(), "Red");
    assert_eq!(Color::Green.display().qualified().to_string(), "Color::Green");
    assert_eq!(
        Color::Blue.display().full().to_string(),
        format!("{}::Color::Blue", module_path!())
    );
}

#[test]
fn unnamed_values() {
    let missing = NameDisplay::<Color>::from_repr(-1);
    assert_eq!(missing.to_string(), "Color(-1)");
    assert_eq!(missing.qualified().to_string(), "Color(-1)");
    assert_eq!(
        missing.full().to_string(),
        format!("{}::Color(-1)", module_path!())
    );
}

#[test]
fn padding_applies_to_whole_text() {
    assert_eq!(format!("[{:>8}]", Color::Red.display()), "[     Red]");
    assert_eq!(format!("[{:<14}]", Color::Red.display().qualified()), "[Color::Red    ]");
    assert_eq!(format!("[{:^11}]", NameDisplay::<Color>::from_repr(7)), "[ Color(7)  ]");
    assert_eq!(format!("[{:-^7}]", Color::Blue.display()), "[-Blue--]");
}
