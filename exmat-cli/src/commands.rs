mod create;

pub use self::create::create;
