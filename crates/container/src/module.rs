//! Registration modules.

use crate::container::Container;
use crate::error::ContainerResult;

/// A unit of DI registration glue: one module per crate area, loaded into the
/// container at startup, before `build()`.
pub trait Module {
    fn name(&self) -> &'static str {
        core::any::type_name::<Self>()
    }

    fn load(&self, container: &dyn Container) -> ContainerResult<()>;
}
