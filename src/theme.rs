pub(crate) mod daily;
