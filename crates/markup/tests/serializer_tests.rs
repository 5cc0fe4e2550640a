//! Tests for minimal-diff serialization.

use markup::{deserialize, serialize};
use text::{
    ClickEvent, Component, HoverEvent, NamedTextColor, ShowEntity, ShowItem, TextColor,
    TextDecoration,
};

// ============================================================================
// Output Shape
// ============================================================================

#[test]
fn plain_text() {
    assert_eq!(serialize(&Component::text("hello")), "hello");
}

#[test]
fn text_is_escaped() {
    assert_eq!(serialize(&Component::text(r"1 <2 \ 3")), r"1 \<2 \\ 3");
}

#[test]
fn shared_color_is_opened_once() {
    let component = Component::empty()
        .append(Component::text("a").color(NamedTextColor::Red))
        .append(Component::text("b").color(NamedTextColor::Red).decorate(TextDecoration::Bold))
        .append(Component::text("c").color(NamedTextColor::Blue).decorate(TextDecoration::Bold));

    insta::assert_snapshot!(serialize(&component), @"<red>a<bold>b</red><blue>c</bold></blue>");
}

#[test]
fn decorations_in_fixed_order() {
    let component = Component::text("x")
        .decorate(TextDecoration::Underlined)
        .decorate(TextDecoration::Obfuscated)
        .decorate(TextDecoration::Bold)
        .decorate(TextDecoration::Strikethrough)
        .decorate(TextDecoration::Italic);

    insta::assert_snapshot!(
        serialize(&component),
        @"<bold><italic><obfuscated><strikethrough><underlined>x</underlined></strikethrough></obfuscated></italic></bold>"
    );
}

#[test]
fn hex_color_closes_as_color() {
    let component = Component::text("x").color(TextColor::from_value(0x123456));
    assert_eq!(serialize(&component), "<color:#123456>x</color>");
}

#[test]
fn events_are_quoted() {
    let component = Component::text("x")
        .click_event(ClickEvent::run_command("/say \"hi\""))
        .insertion("in");

    insta::assert_snapshot!(
        serialize(&component),
        @r#"<click:run_command:"/say \"hi\""><insertion:"in">x</insertion></click>"#
    );
}

#[test]
fn hover_text_is_nested_markup() {
    let component = Component::text("x").hover_event(HoverEvent::show_text(
        Component::text("tip").color(NamedTextColor::Red),
    ));

    assert_eq!(
        serialize(&component),
        r#"<hover:show_text:"<red>tip</red>">x</hover>"#
    );
}

#[test]
fn keybind_and_translatable() {
    let component = Component::empty()
        .append(Component::keybind("key.jump"))
        .append(Component::translatable("chat.type.text", vec![Component::text("Steve")]));

    assert_eq!(
        serialize(&component),
        r#"<key:"key.jump"><lang:"chat.type.text":"Steve">"#
    );
}

#[test]
fn inherited_style_is_serialized() {
    let component = Component::text("a")
        .color(NamedTextColor::Gold)
        .append(Component::text("b"));

    assert_eq!(serialize(&component), "<gold>ab</gold>");
}

// ============================================================================
// Round Trips
// ============================================================================

fn round_trip(component: &Component) {
    let markup = serialize(component);
    let parsed = deserialize(&markup).unwrap_or_else(|err| panic!("{markup}: {err}"));
    assert_eq!(&parsed, component, "{markup}");
}

#[test]
fn round_trip_flat_tree() {
    let component = Component::empty()
        .append(
            Component::text("Hello ")
                .color(NamedTextColor::Yellow)
                .decorate(TextDecoration::Bold),
        )
        .append(
            Component::text("world")
                .color(NamedTextColor::Green)
                .decorate(TextDecoration::Bold)
                .decorate(TextDecoration::Italic)
                .click_event(ClickEvent::open_url("https://example.com")),
        )
        .append(
            Component::keybind("key.jump")
                .color(NamedTextColor::Green)
                .insertion("jump"),
        )
        .append(
            Component::text("<tip>")
                .color(TextColor::from_value(0xabcdef))
                .hover_event(HoverEvent::show_text(
                    Component::text("hover").decorate(TextDecoration::Underlined),
                )),
        )
        .append(Component::translatable(
            "chat.type.text",
            vec![Component::text("a"), Component::text("b").color(NamedTextColor::Aqua)],
        ));

    round_trip(&component);
}

#[test]
fn round_trip_structured_hovers() {
    let component = Component::empty()
        .append(
            Component::text("item").hover_event(HoverEvent::ShowItem(
                ShowItem::new("minecraft:diamond_sword", 1).with_nbt("{Damage:3}"),
            )),
        )
        .append(
            Component::text("entity").hover_event(HoverEvent::ShowEntity(
                ShowEntity::new("minecraft:pig", "7e8d1e9a-0c1b-4f3e-9a2d-5b6c7d8e9f00")
                    .with_name(Component::text("Pig")),
            )),
        );

    round_trip(&component);
}

#[test]
fn round_trip_single_node() {
    round_trip(&Component::text("solo").color(NamedTextColor::DarkPurple));
    round_trip(&Component::text(r"back\slash"));
}
