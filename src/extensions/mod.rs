pub(crate) mod path_ext;
