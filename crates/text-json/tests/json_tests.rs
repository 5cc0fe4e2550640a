//! Tests for the JSON codec.

use serde_json::json;
use text::{
    ClickAction, ClickEvent, Component, Content, HoverEvent, NamedTextColor, NbtSource,
    ShowEntity, ShowItem, TextColor, TextDecoration, TriState,
};
use text_json::{JsonError, decode, encode, from_str, to_string};

fn round_trip(component: &Component) -> Component {
    decode(&encode(component)).expect("encoded component decodes")
}

// ============================================================================
// Encoding
// ============================================================================

#[test]
fn encode_nested_tree() {
    let component = Component::text("Hello ")
        .color(NamedTextColor::Yellow)
        .append(
            Component::text("world")
                .color(NamedTextColor::Green)
                .decorate(TextDecoration::Bold),
        )
        .append("!");

    insta::assert_snapshot!(
        to_string(&component),
        @r#"{"color":"yellow","extra":[{"bold":true,"color":"green","text":"world"},{"text":"!"}],"text":"Hello "}"#
    );
}

#[test]
fn encode_omits_unset_fields() {
    let value = encode(&Component::text("plain"));
    assert_eq!(value, json!({"text": "plain"}));
    assert!(value.get("extra").is_none());
    assert!(value.get("bold").is_none());
}

#[test]
fn encode_translatable_with_args() {
    let component = Component::translatable(
        "chat.type.text",
        vec![Component::text("Steve"), Component::text("hi")],
    );
    assert_eq!(
        encode(&component),
        json!({"translate": "chat.type.text", "with": [{"text": "Steve"}, {"text": "hi"}]})
    );
}

#[test]
fn encode_score() {
    let component = Component::score("@p", "kills");
    assert_eq!(
        encode(&component),
        json!({"score": {"name": "@p", "objective": "kills"}})
    );
}

#[test]
fn encode_events() {
    let component = Component::text("click")
        .click_event(ClickEvent::run_command("/spawn"))
        .hover_event(HoverEvent::show_text("go home"))
        .insertion("spawn");

    assert_eq!(
        encode(&component),
        json!({
            "text": "click",
            "insertion": "spawn",
            "clickEvent": {"action": "run_command", "value": "/spawn"},
            "hoverEvent": {"action": "show_text", "contents": {"text": "go home"}}
        })
    );
}

// ============================================================================
// Decoding - Shorthands
// ============================================================================

#[test]
fn decode_bare_string() {
    assert_eq!(decode(&json!("hello")).unwrap(), Component::text("hello"));
}

#[test]
fn decode_bare_number_and_bool() {
    assert_eq!(decode(&json!(42)).unwrap(), Component::text("42"));
    assert_eq!(decode(&json!(true)).unwrap(), Component::text("true"));
}

#[test]
fn decode_array_appends_to_first() {
    let component = decode(&json!([{"text": "a", "extra": ["b"]}, "c"])).unwrap();
    let texts: Vec<_> = component
        .children()
        .iter()
        .map(|child| child.content().plain())
        .collect();
    assert_eq!(texts, vec!["b", "c"]);
}

#[test]
fn decode_legacy_hover_value() {
    let component = decode(&json!({
        "text": "x",
        "hoverEvent": {"action": "show_text", "value": "tip"}
    }))
    .unwrap();
    assert_eq!(component.style().hover_event, Some(HoverEvent::show_text("tip")));
}

#[test]
fn decode_show_item_string_shorthand() {
    let component = decode(&json!({
        "text": "x",
        "hoverEvent": {"action": "show_item", "contents": "minecraft:stone"}
    }))
    .unwrap();
    assert_eq!(
        component.style().hover_event,
        Some(HoverEvent::ShowItem(ShowItem::new("minecraft:stone", 1)))
    );
}

// ============================================================================
// Decoding - Styles
// ============================================================================

#[test]
fn decode_hex_and_named_colors() {
    let named = decode(&json!({"text": "a", "color": "gold"})).unwrap();
    assert_eq!(named.style().color, Some(NamedTextColor::Gold.into()));

    let hex = decode(&json!({"text": "a", "color": "#abcdef"})).unwrap();
    assert_eq!(hex.style().color, Some(TextColor::from_value(0xabcdef)));
}

#[test]
fn decode_explicit_false_decoration() {
    let component = decode(&json!({"text": "a", "italic": false})).unwrap();
    assert_eq!(
        component.style().decoration(TextDecoration::Italic),
        TriState::False
    );
    assert_eq!(
        component.style().decoration(TextDecoration::Bold),
        TriState::NotSet
    );
}

// ============================================================================
// Decoding - Errors
// ============================================================================

#[test]
fn unknown_color_name_is_unknown_name() {
    let err = decode(&json!({"text": "a", "color": "mauve"})).unwrap_err();
    assert!(err.is_unknown_name());
    assert_eq!(err.to_string(), r#"unknown color name: "mauve""#);
}

#[test]
fn unknown_click_action_is_unknown_name() {
    let err = decode(&json!({
        "text": "a",
        "clickEvent": {"action": "explode", "value": "x"}
    }))
    .unwrap_err();
    assert!(err.is_unknown_name());
}

#[test]
fn malformed_inputs_are_not_unknown_name() {
    let cases = [
        json!(null),
        json!({"color": "red"}),
        json!({"text": "a", "bold": "yes"}),
        json!({"text": "a", "extra": "b"}),
        json!({"text": "a", "color": "#12"}),
        json!({"text": "a", "clickEvent": {"action": "open_url"}}),
        json!({"nbt": "Pos"}),
    ];

    for case in cases {
        let err = decode(&case).unwrap_err();
        assert!(!err.is_unknown_name(), "{case} reported {err}");
    }
}

#[test]
fn syntax_error_from_str() {
    assert!(matches!(from_str("{\"text\":"), Err(JsonError::Syntax(_))));
}

// ============================================================================
// Round Trips
// ============================================================================

#[test]
fn round_trip_every_content_kind() {
    let cases = [
        Component::text("text"),
        Component::translatable("item.minecraft.diamond", vec![Component::text("x")]),
        Component::keybind("key.jump"),
        Component::new(Content::Score {
            name: "@s".into(),
            objective: "deaths".into(),
            value: Some("3".into()),
        }),
        Component::selector("@e[type=pig]"),
        Component::nbt("Inventory", true, NbtSource::Entity("@p".into())),
        Component::nbt("data", false, NbtSource::Storage("mod:store".into())),
    ];

    for case in cases {
        assert_eq!(round_trip(&case), case);
    }
}

#[test]
fn round_trip_full_style() {
    let entity = ShowEntity::new("minecraft:pig", "0b5a6f8c-3d1e-4b7a-9f0e-2a4c6e8b0d1f")
        .with_name(Component::text("Pig").color(NamedTextColor::LightPurple));

    let component = Component::text("styled")
        .color(TextColor::from_value(0x123456))
        .decorate(TextDecoration::Bold)
        .decoration(TextDecoration::Underlined, false)
        .click_event(ClickEvent::new(ClickAction::CopyToClipboard, "copied"))
        .hover_event(HoverEvent::ShowEntity(entity))
        .insertion("ins")
        .append(
            Component::text("item")
                .hover_event(HoverEvent::ShowItem(
                    ShowItem::new("minecraft:diamond_sword", 1).with_nbt("{Damage:5}"),
                )),
        );

    assert_eq!(round_trip(&component), component);
}

#[test]
fn round_trip_through_text() {
    let component = Component::text("a")
        .color(NamedTextColor::Aqua)
        .append(Component::keybind("key.sneak").decorate(TextDecoration::Obfuscated));
    assert_eq!(from_str(&to_string(&component)).unwrap(), component);
}

// ============================================================================
// Serde Adapter
// ============================================================================

#[derive(serde::Serialize, serde::Deserialize, Debug, PartialEq)]
struct Status {
    #[serde(with = "text_json::as_json")]
    description: Component,
    players: u32,
}

#[test]
fn serde_adapter_embeds_component() {
    let status = Status {
        description: Component::text("A server").color(NamedTextColor::Green),
        players: 3,
    };

    let json = serde_json::to_value(&status).unwrap();
    assert_eq!(
        json,
        json!({"description": {"text": "A server", "color": "green"}, "players": 3})
    );

    let back: Status = serde_json::from_value(json).unwrap();
    assert_eq!(back, status);
}

#[test]
fn serde_adapter_reports_decode_errors() {
    let result: Result<Status, _> =
        serde_json::from_value(json!({"description": {"color": "red"}, "players": 1}));
    assert!(result.is_err());
}

#[test]
fn json_component_newtype() {
    let messages: Vec<text_json::JsonComponent> =
        serde_json::from_str(r#"["plain", {"text": "red", "color": "red"}]"#).unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(Component::from(messages[0].clone()), Component::text("plain"));
    assert_eq!(
        messages[1].0.style().color,
        Some(NamedTextColor::Red.into())
    );

    let back = serde_json::to_string(&messages[0]).unwrap();
    assert_eq!(back, r#"{"text":"plain"}"#);
}
