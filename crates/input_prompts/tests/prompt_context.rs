//! End-to-end tests for `PromptContext`:
//! - tag formatting for the active device
//! - active device changes by input and disconnects
//! - duplicate device registrations
//! - platform overrides

use std::cell::RefCell;
use std::rc::Rc;

use input_prompts::{
    ActionAsset, ActionBinding, ActionMap, Device, DeviceChange, DeviceDataset, DeviceKind,
    Diagnostic, GlyphRef, NOT_INITIALIZED_TEXT, Platform, PromptContext, PromptSettings,
    ResolveError,
};

fn controls() -> ActionAsset {
    ActionAsset::new("Controls")
        .with_map(
            ActionMap::new("Player")
                .with_binding(ActionBinding::new("Jump", "<Gamepad>/buttonSouth"))
                .with_binding(ActionBinding::new("Jump", "<Keyboard>/space"))
                .with_binding(ActionBinding::composite("Move", "2DVector"))
                .with_binding(ActionBinding::part("Move", "<Keyboard>/w"))
                .with_binding(ActionBinding::part("Move", "<Keyboard>/s"))
                .with_binding(ActionBinding::part("Move", "<Keyboard>/a"))
                .with_binding(ActionBinding::part("Move", "<Keyboard>/d"))
                .with_binding(ActionBinding::new("Move", "<Gamepad>/leftStick")),
        )
        .with_map(
            ActionMap::new("UI")
                .with_binding(ActionBinding::new("Submit", "*/{Submit}"))
                .with_binding(ActionBinding::new("Submit", "<Gamepad>/buttonSouth"))
                .with_binding(ActionBinding::new("Submit", "<Keyboard>/enter")),
        )
}

fn gamepad_dataset() -> DeviceDataset {
    DeviceDataset::new("Xbox")
        .with_device("XInputControllerWindows")
        .with_prompt("<Gamepad>/buttonSouth", "G1")
        .with_prompt("<Gamepad>/leftStick", "LS")
        .with_sprite("Menu", "xbox_menu")
}

fn keyboard_dataset() -> DeviceDataset {
    DeviceDataset::new("Keyboard")
        .with_device("Keyboard")
        .with_prompt("<Keyboard>/space", "space")
        .with_prompt("<Keyboard>/w", "w")
        .with_prompt("<Keyboard>/a", "a")
        .with_prompt("<Keyboard>/s", "s")
        .with_prompt("<Keyboard>/d", "d")
        .with_prompt("<Keyboard>/enter", "enter")
}

fn settings() -> PromptSettings {
    PromptSettings::default()
        .with_action_asset(controls())
        .with_dataset(gamepad_dataset())
        .with_dataset(keyboard_dataset())
        .with_template("<g:{SPRITE}>")
}

fn pad() -> Device {
    Device::new(1, "XInputControllerWindows", DeviceKind::Gamepad)
}

fn keyboard() -> Device {
    Device::new(2, "Keyboard", DeviceKind::Keyboard)
}

fn context_with(settings: PromptSettings, devices: &[Device]) -> PromptContext {
    let mut context = PromptContext::new(Platform::Windows);
    context.initialize(Some(settings), &[], devices);
    context
}

#[test]
fn format_single_tag_for_gamepad() {
    let context = context_with(settings(), &[keyboard(), pad()]);
    assert_eq!(context.format("[Player/Jump]"), "<g:G1>");
    assert_eq!(
        context.format("Press [player/JUMP] to jump"),
        "Press <g:G1> to jump"
    );
}

#[test]
fn format_before_initialize_returns_sentinel() {
    let context = PromptContext::new(Platform::Windows);
    let output = context.format("[Player/Jump]");
    assert_eq!(output, NOT_INITIALIZED_TEXT);
    assert_ne!(output, "[Player/Jump]");
}

#[test]
fn identical_tags_are_all_replaced() {
    let context = context_with(settings(), &[pad()]);
    assert_eq!(context.format("[UI/Submit] and [UI/Submit]"), "<g:G1> and <g:G1>");
}

#[test]
fn composite_resolves_every_part_in_order() {
    let mut context = context_with(settings(), &[pad(), keyboard()]);
    context.on_button_pressed(&keyboard());

    let resolution = context.resolve("Player/Move").unwrap();
    let glyphs: Vec<_> = resolution
        .entries
        .iter()
        .map(|entry| entry.glyph_id.as_str())
        .collect();
    assert_eq!(glyphs, ["w", "s", "a", "d"]);
    assert_eq!(context.format("Move: [Player/Move]"), "Move: <g:w><g:s><g:a><g:d>");

    // Only the composite parent and the gamepad stick are reported missing.
    let missing: Vec<_> = resolution
        .diagnostics
        .iter()
        .map(|Diagnostic::MissingPromptForBinding { binding_path, .. }| binding_path.as_str())
        .collect();
    assert_eq!(missing, ["2DVector", "<Gamepad>/leftStick"]);
}

#[test]
fn usage_bindings_never_report_missing_prompts() {
    let context = context_with(settings(), &[keyboard()]);
    let resolution = context.resolve("UI/Submit").unwrap();

    assert_eq!(resolution.entries.len(), 1);
    assert_eq!(resolution.entries[0].glyph_id, "enter");
    assert!(resolution.diagnostics.iter().all(|diagnostic| {
        let Diagnostic::MissingPromptForBinding { binding_path, .. } = diagnostic;
        !binding_path.contains("*/{")
    }));
}

#[test]
fn failures_are_embedded_in_text() {
    let context = context_with(settings(), &[pad()]);
    assert_eq!(
        context.format("Fly with [Player/Fly]!"),
        "Fly with MISSING_ACTION Player/Fly!"
    );
    assert_eq!(
        context.resolve("Player/Fly").unwrap_err(),
        ResolveError::UnknownAction("Player/Fly".into())
    );

    let mut context = context_with(
        settings().with_action_asset(
            ActionAsset::new("Extra").with_map(
                ActionMap::new("Player").with_binding(ActionBinding::new("Crouch", "<Keyboard>/c")),
            ),
        ),
        &[pad()],
    );
    assert_eq!(
        context.format("[Player/Jump] [Player/Crouch]"),
        "<g:G1> MISSING_DEVICE_ENTRIES 'XInputControllerWindows'"
    );

    let unknown = Device::new(9, "SteamController", DeviceKind::Gamepad);
    context.on_button_pressed(&unknown);
    assert_eq!(
        context.format("[Player/Jump]"),
        "MISSING_DEVICE 'SteamController'"
    );
}

#[test]
fn no_active_device() {
    let context = context_with(settings(), &[]);
    assert_eq!(context.active_device(), None);
    assert_eq!(context.format("Jump: [Player/Jump]"), "Jump: NO_ACTIVE_DEVICE");
    assert!(context.resolve_single_glyph("Player/Jump").is_none());
}

#[test]
fn unterminated_tag_is_left_alone() {
    let context = context_with(settings(), &[pad()]);
    assert_eq!(
        context.format("[Player/Jump] then [Player/Jump"),
        "<g:G1> then [Player/Jump"
    );
}

#[test]
fn last_input_wins_and_notifies_once() {
    let mut context = context_with(settings(), &[keyboard(), pad()]);
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    context.subscribe(move |device| sink.borrow_mut().push(device.cloned()));

    assert_eq!(context.active_device(), Some(&pad()));
    context.on_button_pressed(&keyboard());
    context.on_button_pressed(&keyboard());
    assert_eq!(*seen.borrow(), vec![Some(keyboard())]);
    assert_eq!(context.format("[Player/Jump]"), "<g:space>");
}

#[test]
fn disconnect_reselects_and_always_notifies() {
    let mut context = context_with(settings(), &[pad(), keyboard()]);
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    context.subscribe(move |device| sink.borrow_mut().push(device.cloned()));

    assert!(context.on_device_change(&pad(), DeviceChange::Disconnected, &[keyboard()]));
    assert_eq!(context.active_device(), Some(&keyboard()));

    assert!(context.on_device_change(&keyboard(), DeviceChange::Removed, &Vec::<Device>::new()));
    assert_eq!(context.active_device(), None);

    assert_eq!(*seen.borrow(), vec![Some(keyboard()), None]);
}

#[test]
fn duplicate_device_names_keep_first_dataset() {
    let shadow = DeviceDataset::new("Shadow")
        .with_device("XInputControllerWindows")
        .with_prompt("<Gamepad>/buttonSouth", "SHADOW");
    let context = context_with(settings().with_dataset(shadow), &[pad()]);

    assert_eq!(context.active_dataset().unwrap().sprite_sheet, "Xbox");
    assert_eq!(context.format("[Player/Jump]"), "<g:G1>");
}

#[test]
fn missing_entries_name_the_active_alias() {
    let crouch = ActionAsset::new("Extra").with_map(
        ActionMap::new("Player").with_binding(ActionBinding::new("Crouch", "<Keyboard>/c")),
    );
    let xbox = DeviceDataset::new("Xbox")
        .with_device("XInputControllerWindows")
        .with_device("XboxOneGampadMacOSWireless")
        .with_prompt("<Gamepad>/buttonSouth", "G1");
    let settings = PromptSettings::default()
        .with_action_asset(controls())
        .with_action_asset(crouch)
        .with_dataset(xbox)
        .with_template("<g:{SPRITE}>");

    let mac_pad = Device::new(3, "XboxOneGampadMacOSWireless", DeviceKind::Gamepad);
    let context = context_with(settings.clone(), &[mac_pad]);
    assert_eq!(context.format("[Player/Jump]"), "<g:G1>");
    assert_eq!(
        context.format("[Player/Crouch]"),
        "MISSING_DEVICE_ENTRIES 'XboxOneGampadMacOSWireless'"
    );

    // A forced dataset is reported under its own label.
    let mut context = PromptContext::new(Platform::Switch);
    context.initialize(
        Some(settings.with_platform_override(
            Platform::Switch,
            DeviceDataset::new("SwitchPrompts").with_prompt("<Gamepad>/buttonSouth", "B"),
        )),
        &[],
        &[pad()],
    );
    assert_eq!(
        context.format("[Player/Crouch]"),
        "MISSING_DEVICE_ENTRIES 'SwitchPrompts'"
    );
}

#[test]
fn platform_override_ignores_active_device() {
    let switch = DeviceDataset::new("Switch").with_prompt("<Gamepad>/buttonSouth", "B");
    let mut context = PromptContext::new(Platform::Switch);
    context.initialize(
        Some(settings().with_platform_override(Platform::Switch, switch)),
        &[],
        &[pad(), keyboard()],
    );

    assert_eq!(context.format("[Player/Jump]"), "<g:B>");
    context.on_button_pressed(&keyboard());
    assert_eq!(context.active_device(), Some(&keyboard()));
    assert_eq!(context.format("[Player/Jump]"), "<g:B>");

    let mut context = PromptContext::new(Platform::Windows);
    context.initialize(
        Some(settings().with_platform_override(
            Platform::Switch,
            DeviceDataset::new("Switch"),
        )),
        &[],
        &[pad()],
    );
    assert_eq!(context.format("[Player/Jump]"), "<g:G1>");
}

#[test]
fn single_and_named_glyphs() {
    let context = context_with(settings(), &[pad()]);
    assert_eq!(
        context.resolve_single_glyph("Player/Move"),
        Some(GlyphRef {
            sprite_sheet: "Xbox".into(),
            glyph_id: "LS".into(),
        })
    );
    assert_eq!(
        context.lookup_named_glyph("MENU").map(|glyph| glyph.glyph_id),
        Some("xbox_menu".to_string())
    );
}

#[test]
fn reinitialize_resets_device_state() {
    let mut context = context_with(settings(), &[pad(), keyboard()]);
    context.on_button_pressed(&keyboard());
    assert_eq!(context.active_device(), Some(&keyboard()));

    context.initialize(Some(settings()), &[], &[pad(), keyboard()]);
    assert_eq!(context.active_device(), Some(&pad()));
}
