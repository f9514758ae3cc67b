mod mx_resolver;

pub use mx_resolver::HickoryMxLookup;
