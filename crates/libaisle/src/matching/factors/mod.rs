pub(crate) mod availability;
pub(crate) mod budget;
pub(crate) mod location;
pub(crate) mod popularity;
pub(crate) mod rating;
pub(crate) mod style;
