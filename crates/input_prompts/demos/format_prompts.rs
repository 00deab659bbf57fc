//! Formats a few prompt strings while simulating device activity.
//!
//! Run with `cargo run -p input_prompts --example format_prompts`.

use anyhow::Result;
use input_prompts::{Device, DeviceChange, DeviceKind, DeviceSignal, PromptContext, PromptSettings};
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{filter::filter_fn, fmt, prelude::*};

const SETTINGS: &str = r#"(
    action_assets: [(
        name: "Controls",
        maps: [
            (
                name: "Player",
                bindings: [
                    (action: "Jump", path: "<Gamepad>/buttonSouth"),
                    (action: "Jump", path: "<Keyboard>/space"),
                    (action: "Move", path: "2DVector", is_composite: true),
                    (action: "Move", path: "<Keyboard>/w", is_part_of_composite: true),
                    (action: "Move", path: "<Keyboard>/a", is_part_of_composite: true),
                    (action: "Move", path: "<Keyboard>/s", is_part_of_composite: true),
                    (action: "Move", path: "<Keyboard>/d", is_part_of_composite: true),
                    (action: "Move", path: "<Gamepad>/leftStick"),
                ],
            ),
            (
                name: "UI",
                bindings: [
                    (action: "Submit", path: "*/{Submit}"),
                    (action: "Submit", path: "<Gamepad>/buttonSouth"),
                    (action: "Submit", path: "<Keyboard>/enter"),
                ],
            ),
        ],
    )],
    device_datasets: [
        (
            device_names: ["XInputControllerWindows", "XboxOneGampadMacOSWireless"],
            sprite_sheet: "XboxPrompts",
            binding_prompts: [
                (binding_path: "<Gamepad>/buttonSouth", glyph_id: "xbox_button_a"),
                (binding_path: "<Gamepad>/leftStick", glyph_id: "xbox_stick_l"),
            ],
            sprites: [(name: "Menu", glyph_id: "xbox_button_menu")],
        ),
        (
            device_names: ["Keyboard"],
            sprite_sheet: "KeyboardPrompts",
            binding_prompts: [
                (binding_path: "<Keyboard>/space", glyph_id: "keyboard_space"),
                (binding_path: "<Keyboard>/enter", glyph_id: "keyboard_enter"),
                (binding_path: "<Keyboard>/w", glyph_id: "keyboard_w"),
                (binding_path: "<Keyboard>/a", glyph_id: "keyboard_a"),
                (binding_path: "<Keyboard>/s", glyph_id: "keyboard_s"),
                (binding_path: "<Keyboard>/d", glyph_id: "keyboard_d"),
            ],
            sprites: [(name: "Menu", glyph_id: "keyboard_escape")],
        ),
    ],
    prompt_template: "<sprite=\"{SHEET}\" name=\"{SPRITE}\">",
)"#;

const LINES: &[&str] = &[
    "Press [Player/Jump] to jump",
    "Use [Player/Move] to walk",
    "Confirm with [UI/Submit], or fly with [Player/Fly]",
];

fn init_logging() {
    #[cfg(debug_assertions)]
    let level = LevelFilter::DEBUG;

    #[cfg(not(debug_assertions))]
    let level = LevelFilter::WARN;

    let console_layer = fmt::Layer::default()
        .with_target(false)
        .with_filter(filter_fn(move |metadata| metadata.level() <= &level));

    tracing_subscriber::registry().with(console_layer).init();
}

fn print_lines(context: &PromptContext) {
    for line in LINES {
        println!("  {}", context.format(line));
    }
}

fn main() -> Result<()> {
    init_logging();

    let keyboard = Device::new(1, "Keyboard", DeviceKind::Keyboard);
    let pad = Device::new(2, "XInputControllerWindows", DeviceKind::Gamepad);
    let mut connected = vec![keyboard.clone(), pad.clone()];

    let mut context = PromptContext::default();
    println!("before initialization:");
    print_lines(&context);

    context.subscribe(|device| match device {
        Some(device) => info!("Prompts now follow {device}"),
        None => info!("Prompts have no device to follow"),
    });
    context.initialize(Some(PromptSettings::from_ron_str(SETTINGS)?), &[], &connected);

    println!("gamepad (default by priority):");
    print_lines(&context);

    context.handle_signal(&DeviceSignal::ButtonPressed(keyboard.clone()), &connected);
    println!("keyboard (last input):");
    print_lines(&context);

    context.handle_signal(&DeviceSignal::ButtonPressed(pad.clone()), &connected);
    connected.retain(|device| *device != pad);
    context.handle_signal(&DeviceSignal::Changed(pad, DeviceChange::Disconnected), &connected);
    println!("gamepad disconnected:");
    print_lines(&context);

    if let Some(menu) = context.lookup_named_glyph("Menu") {
        println!("menu glyph: {menu}");
    }

    Ok(())
}
