//! Component to JSON.

use serde_json::{Map, Value};
use text::{
    ClickEvent, Component, Content, HoverEvent, Named, NbtSource, ShowEntity, ShowItem, Style,
    TextDecoration,
};

use crate::keys;

/// Encode a component tree as a JSON value.
///
/// Only explicitly set style fields are written, and `extra` is omitted when
/// the component has no children.
pub fn encode(component: &Component) -> Value {
    let mut object = Map::new();
    encode_content(component.content(), &mut object);
    encode_style(component.style(), &mut object);

    if !component.children().is_empty() {
        let extra = component.children().iter().map(encode).collect();
        object.insert(keys::EXTRA.into(), Value::Array(extra));
    }

    Value::Object(object)
}

fn encode_content(content: &Content, object: &mut Map<String, Value>) {
    match content {
        Content::Text(text) => {
            object.insert(keys::TEXT.into(), text.as_str().into());
        }
        Content::Translatable { key, args } => {
            object.insert(keys::TRANSLATE.into(), key.as_str().into());
            if !args.is_empty() {
                let with = args.iter().map(encode).collect();
                object.insert(keys::TRANSLATE_WITH.into(), Value::Array(with));
            }
        }
        Content::Keybind(keybind) => {
            object.insert(keys::KEYBIND.into(), keybind.as_str().into());
        }
        Content::Score {
            name,
            objective,
            value,
        } => {
            let mut score = Map::new();
            score.insert(keys::SCORE_NAME.into(), name.as_str().into());
            score.insert(keys::SCORE_OBJECTIVE.into(), objective.as_str().into());
            if let Some(value) = value {
                score.insert(keys::SCORE_VALUE.into(), value.as_str().into());
            }
            object.insert(keys::SCORE.into(), Value::Object(score));
        }
        Content::Selector(pattern) => {
            object.insert(keys::SELECTOR.into(), pattern.as_str().into());
        }
        Content::Nbt {
            path,
            interpret,
            source,
        } => {
            object.insert(keys::NBT.into(), path.as_str().into());
            if *interpret {
                object.insert(keys::NBT_INTERPRET.into(), Value::Bool(true));
            }
            let (key, location) = match source {
                NbtSource::Block(pos) => (keys::NBT_BLOCK, pos),
                NbtSource::Entity(selector) => (keys::NBT_ENTITY, selector),
                NbtSource::Storage(id) => (keys::NBT_STORAGE, id),
            };
            object.insert(key.into(), location.as_str().into());
        }
    }
}

fn encode_style(style: &Style, object: &mut Map<String, Value>) {
    if let Some(color) = &style.color {
        let color = match color.as_named() {
            Some(named) => named.name().to_string(),
            None => color.as_hex_string(),
        };
        object.insert(keys::COLOR.into(), Value::String(color));
    }

    for decoration in TextDecoration::ALL {
        if let Some(state) = style.decoration(decoration).to_bool() {
            object.insert(decoration.name().into(), Value::Bool(state));
        }
    }

    if let Some(insertion) = &style.insertion {
        object.insert(keys::INSERTION.into(), insertion.as_str().into());
    }
    if let Some(click) = &style.click_event {
        object.insert(keys::CLICK_EVENT.into(), encode_click(click));
    }
    if let Some(hover) = &style.hover_event {
        object.insert(keys::HOVER_EVENT.into(), encode_hover(hover));
    }
}

fn encode_click(event: &ClickEvent) -> Value {
    let mut object = Map::new();
    object.insert(keys::EVENT_ACTION.into(), event.action.name().into());
    object.insert(keys::EVENT_VALUE.into(), event.value.as_str().into());
    Value::Object(object)
}

fn encode_hover(event: &HoverEvent) -> Value {
    let mut object = Map::new();
    object.insert(keys::EVENT_ACTION.into(), event.action().name().into());
    object.insert(keys::EVENT_CONTENTS.into(), encode_hover_contents(event));
    Value::Object(object)
}

/// Encode only the `contents` payload of a hover event.
///
/// Used by the markup codec, which embeds item and entity payloads as JSON
/// inside `hover` tags.
pub fn encode_hover_contents(event: &HoverEvent) -> Value {
    match event {
        HoverEvent::ShowText(text) => encode(text),
        HoverEvent::ShowItem(item) => encode_show_item(item),
        HoverEvent::ShowEntity(entity) => encode_show_entity(entity),
    }
}

fn encode_show_item(item: &ShowItem) -> Value {
    let mut object = Map::new();
    object.insert(keys::SHOW_ITEM_ID.into(), item.item.as_str().into());
    object.insert(keys::SHOW_ITEM_COUNT.into(), item.count.into());
    if let Some(nbt) = &item.nbt {
        object.insert(keys::SHOW_ITEM_TAG.into(), nbt.as_str().into());
    }
    Value::Object(object)
}

fn encode_show_entity(entity: &ShowEntity) -> Value {
    let mut object = Map::new();
    object.insert(keys::SHOW_ENTITY_TYPE.into(), entity.kind.as_str().into());
    object.insert(keys::SHOW_ENTITY_ID.into(), entity.id.as_str().into());
    if let Some(name) = &entity.name {
        object.insert(keys::SHOW_ENTITY_NAME.into(), encode(name));
    }
    Value::Object(object)
}
