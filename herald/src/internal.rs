mod handler;
mod route;
mod type_name;

pub(crate) use handler::{Factory, Handler, Singleton};
pub(crate) use route::Route;
pub(crate) use type_name::short_type_name;
