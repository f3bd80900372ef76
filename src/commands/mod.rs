pub type CmdResult<T> = repath::Result<(T, i32)>;

pub mod rewrite;
