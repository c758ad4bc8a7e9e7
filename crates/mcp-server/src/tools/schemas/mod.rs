pub(super) mod root;
pub(super) mod search;
