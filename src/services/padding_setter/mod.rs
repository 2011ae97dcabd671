mod dry_run;
mod kitty;
mod r#trait;

#[cfg(test)]
pub use self::kitty::KittyPaddingSetter;
pub use self::r#trait::{create_padding_setter, PaddingSetterTrait};
