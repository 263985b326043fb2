/*!
Build-configuration resolver for zenoh-pico under PlatformIO.

PlatformIO builds zenoh-pico for several embedded frameworks out of one source
tree by filtering `system/` subtrees and injecting preprocessor defines. This
crate implements that decision step: map a (framework, platform, board,
generic-override) tuple to an ordered source-filter rule list and an ordered
define list, then append both to the build environments that consume them.

It computes configuration only. Interpreting the filter patterns, resolving
dependencies, and compiling are the build tool's job.
*/

pub mod config;
pub mod env;
pub mod errors;
pub mod identity;
pub mod resolve;

pub type BuildConfResult<T> = anyhow::Result<T>;
