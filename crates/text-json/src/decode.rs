//! JSON to component.

use serde_json::{Map, Value};
use text::{
    ClickAction, ClickEvent, Component, Content, HoverAction, HoverEvent, Named, NbtSource,
    ShowEntity, ShowItem, Style, TextColor, TextDecoration,
};

use crate::error::JsonError;
use crate::keys;

type Object = Map<String, Value>;

/// Decode a JSON value into a component tree.
///
/// Besides the object form, a bare string, number or boolean decodes to a
/// text component, and an array decodes to its first element with the
/// remaining elements appended as children.
pub fn decode(value: &Value) -> Result<Component, JsonError> {
    match value {
        Value::String(text) => Ok(Component::text(text.as_str())),
        Value::Number(number) => Ok(Component::text(number.to_string())),
        Value::Bool(flag) => Ok(Component::text(flag.to_string())),
        Value::Array(items) => decode_array(items),
        Value::Object(object) => decode_object(object),
        Value::Null => Err(JsonError::Malformed("null is not a component".into())),
    }
}

fn decode_array(items: &[Value]) -> Result<Component, JsonError> {
    let (first, rest) = items
        .split_first()
        .ok_or_else(|| JsonError::Malformed("empty component array".into()))?;

    let head = decode(first)?;
    let mut children = head.children().to_vec();
    for item in rest {
        children.push(decode(item)?);
    }
    Ok(head.with_children(children))
}

fn decode_object(object: &Object) -> Result<Component, JsonError> {
    let content = decode_content(object)?;
    let style = decode_style(object)?;

    let children = match object.get(keys::EXTRA) {
        None => Vec::new(),
        Some(Value::Array(extra)) => extra.iter().map(decode).collect::<Result<_, _>>()?,
        Some(_) => {
            return Err(JsonError::WrongType {
                field: keys::EXTRA,
                expected: "an array",
            });
        }
    };

    Ok(Component::new(content)
        .with_style(style)
        .with_children(children))
}

fn decode_content(object: &Object) -> Result<Content, JsonError> {
    if let Some(text) = object.get(keys::TEXT) {
        let text = match text {
            Value::String(text) => text.clone(),
            Value::Number(number) => number.to_string(),
            Value::Bool(flag) => flag.to_string(),
            _ => {
                return Err(JsonError::WrongType {
                    field: keys::TEXT,
                    expected: "a string",
                });
            }
        };
        return Ok(Content::Text(text));
    }

    if object.contains_key(keys::TRANSLATE) {
        let key = string_field(object, keys::TRANSLATE)?.to_string();
        let args = match object.get(keys::TRANSLATE_WITH) {
            None => Vec::new(),
            Some(Value::Array(with)) => with.iter().map(decode).collect::<Result<_, _>>()?,
            Some(_) => {
                return Err(JsonError::WrongType {
                    field: keys::TRANSLATE_WITH,
                    expected: "an array",
                });
            }
        };
        return Ok(Content::Translatable { key, args });
    }

    if object.contains_key(keys::KEYBIND) {
        let keybind = string_field(object, keys::KEYBIND)?;
        return Ok(Content::Keybind(keybind.to_string()));
    }

    if let Some(score) = object.get(keys::SCORE) {
        let score = score.as_object().ok_or(JsonError::WrongType {
            field: keys::SCORE,
            expected: "an object",
        })?;
        let name = required_string(score, keys::SCORE_NAME, "score")?;
        let objective = required_string(score, keys::SCORE_OBJECTIVE, "score")?;
        let value = optional_string(score, keys::SCORE_VALUE)?;
        return Ok(Content::Score {
            name: name.to_string(),
            objective: objective.to_string(),
            value: value.map(str::to_string),
        });
    }

    if object.contains_key(keys::SELECTOR) {
        let pattern = string_field(object, keys::SELECTOR)?;
        return Ok(Content::Selector(pattern.to_string()));
    }

    if object.contains_key(keys::NBT) {
        let path = string_field(object, keys::NBT)?.to_string();
        let interpret = match object.get(keys::NBT_INTERPRET) {
            None => false,
            Some(Value::Bool(flag)) => *flag,
            Some(_) => {
                return Err(JsonError::WrongType {
                    field: keys::NBT_INTERPRET,
                    expected: "a boolean",
                });
            }
        };
        let source = if let Some(pos) = optional_string(object, keys::NBT_BLOCK)? {
            NbtSource::Block(pos.to_string())
        } else if let Some(selector) = optional_string(object, keys::NBT_ENTITY)? {
            NbtSource::Entity(selector.to_string())
        } else if let Some(id) = optional_string(object, keys::NBT_STORAGE)? {
            NbtSource::Storage(id.to_string())
        } else {
            return Err(JsonError::Malformed(
                "nbt component needs one of block, entity or storage".into(),
            ));
        };
        return Ok(Content::Nbt {
            path,
            interpret,
            source,
        });
    }

    log::debug!(
        "component object has no content key: {:?}",
        object.keys().collect::<Vec<_>>()
    );
    Err(JsonError::Malformed("object has no content key".into()))
}

fn decode_style(object: &Object) -> Result<Style, JsonError> {
    let mut style = Style::new();

    if let Some(color) = optional_string(object, keys::COLOR)? {
        style = style.with_color(TextColor::parse(color)?);
    }

    for decoration in TextDecoration::ALL {
        match object.get(decoration.name()) {
            None => {}
            Some(Value::Bool(flag)) => style = style.with_decoration(decoration, *flag),
            Some(_) => {
                return Err(JsonError::WrongType {
                    field: decoration.name(),
                    expected: "a boolean",
                });
            }
        }
    }

    if let Some(insertion) = optional_string(object, keys::INSERTION)? {
        style = style.with_insertion(insertion);
    }

    if let Some(click) = object.get(keys::CLICK_EVENT) {
        style = style.with_click_event(decode_click(click)?);
    }

    if let Some(hover) = object.get(keys::HOVER_EVENT) {
        style = style.with_hover_event(decode_hover(hover)?);
    }

    Ok(style)
}

fn decode_click(value: &Value) -> Result<ClickEvent, JsonError> {
    let object = value.as_object().ok_or(JsonError::WrongType {
        field: keys::CLICK_EVENT,
        expected: "an object",
    })?;

    let action = ClickAction::from_name(required_string(object, keys::EVENT_ACTION, "clickEvent")?)?;
    let value = match object.get(keys::EVENT_VALUE) {
        Some(Value::String(value)) => value.clone(),
        Some(Value::Number(page)) => page.to_string(),
        Some(_) => {
            return Err(JsonError::WrongType {
                field: keys::EVENT_VALUE,
                expected: "a string",
            });
        }
        None => {
            return Err(JsonError::MissingField {
                field: keys::EVENT_VALUE,
                context: "clickEvent",
            });
        }
    };

    Ok(ClickEvent::new(action, value))
}

fn decode_hover(value: &Value) -> Result<HoverEvent, JsonError> {
    let object = value.as_object().ok_or(JsonError::WrongType {
        field: keys::HOVER_EVENT,
        expected: "an object",
    })?;

    let action = HoverAction::from_name(required_string(object, keys::EVENT_ACTION, "hoverEvent")?)?;
    let contents = object
        .get(keys::EVENT_CONTENTS)
        .or_else(|| object.get(keys::EVENT_VALUE))
        .ok_or(JsonError::MissingField {
            field: keys::EVENT_CONTENTS,
            context: "hoverEvent",
        })?;

    decode_hover_contents(action, contents)
}

/// Decode the `contents` payload of a hover event for a known action.
pub fn decode_hover_contents(action: HoverAction, contents: &Value) -> Result<HoverEvent, JsonError> {
    match action {
        HoverAction::ShowText => Ok(HoverEvent::ShowText(Box::new(decode(contents)?))),
        HoverAction::ShowItem => decode_show_item(contents).map(HoverEvent::ShowItem),
        HoverAction::ShowEntity => decode_show_entity(contents).map(HoverEvent::ShowEntity),
    }
}

fn decode_show_item(contents: &Value) -> Result<ShowItem, JsonError> {
    let object = match contents {
        Value::String(item) => return Ok(ShowItem::new(item.as_str(), 1)),
        Value::Object(object) => object,
        _ => {
            return Err(JsonError::WrongType {
                field: keys::EVENT_CONTENTS,
                expected: "an item object",
            });
        }
    };

    let item = required_string(object, keys::SHOW_ITEM_ID, "show_item")?;
    let count = match object.get(keys::SHOW_ITEM_COUNT) {
        None => 1,
        Some(count) => count
            .as_u64()
            .and_then(|count| u32::try_from(count).ok())
            .ok_or(JsonError::WrongType {
                field: keys::SHOW_ITEM_COUNT,
                expected: "a non-negative integer",
            })?,
    };

    let mut show = ShowItem::new(item, count);
    if let Some(nbt) = optional_string(object, keys::SHOW_ITEM_TAG)? {
        show = show.with_nbt(nbt);
    }
    Ok(show)
}

fn decode_show_entity(contents: &Value) -> Result<ShowEntity, JsonError> {
    let object = contents.as_object().ok_or(JsonError::WrongType {
        field: keys::EVENT_CONTENTS,
        expected: "an entity object",
    })?;

    let kind = required_string(object, keys::SHOW_ENTITY_TYPE, "show_entity")?;
    let id = required_string(object, keys::SHOW_ENTITY_ID, "show_entity")?;

    let mut show = ShowEntity::new(kind, id);
    if let Some(name) = object.get(keys::SHOW_ENTITY_NAME) {
        show = show.with_name(decode(name)?);
    }
    Ok(show)
}

fn string_field<'a>(object: &'a Object, field: &'static str) -> Result<&'a str, JsonError> {
    object
        .get(field)
        .and_then(Value::as_str)
        .ok_or(JsonError::WrongType {
            field,
            expected: "a string",
        })
}

fn required_string<'a>(
    object: &'a Object,
    field: &'static str,
    context: &'static str,
) -> Result<&'a str, JsonError> {
    if !object.contains_key(field) {
        return Err(JsonError::MissingField { field, context });
    }
    string_field(object, field)
}

fn optional_string<'a>(object: &'a Object, field: &'static str) -> Result<Option<&'a str>, JsonError> {
    match object.get(field) {
        None => Ok(None),
        Some(_) => string_field(object, field).map(Some),
    }
}
