//! JSON object keys.

pub const TEXT: &str = "text";
pub const TRANSLATE: &str = "translate";
pub const TRANSLATE_WITH: &str = "with";
pub const KEYBIND: &str = "keybind";
pub const SCORE: &str = "score";
pub const SCORE_NAME: &str = "name";
pub const SCORE_OBJECTIVE: &str = "objective";
pub const SCORE_VALUE: &str = "value";
pub const SELECTOR: &str = "selector";
pub const NBT: &str = "nbt";
pub const NBT_INTERPRET: &str = "interpret";
pub const NBT_BLOCK: &str = "block";
pub const NBT_ENTITY: &str = "entity";
pub const NBT_STORAGE: &str = "storage";
pub const EXTRA: &str = "extra";

pub const COLOR: &str = "color";
pub const INSERTION: &str = "insertion";
pub const CLICK_EVENT: &str = "clickEvent";
pub const HOVER_EVENT: &str = "hoverEvent";
pub const EVENT_ACTION: &str = "action";
pub const EVENT_VALUE: &str = "value";
pub const EVENT_CONTENTS: &str = "contents";

pub const SHOW_ITEM_ID: &str = "id";
pub const SHOW_ITEM_COUNT: &str = "count";
pub const SHOW_ITEM_TAG: &str = "tag";
pub const SHOW_ENTITY_TYPE: &str = "type";
pub const SHOW_ENTITY_ID: &str = "id";
pub const SHOW_ENTITY_NAME: &str = "name";
