/*!
# Nova GL - OpenGL Driver Backend

OpenGL 3.3 implementation of the Nova GL driver trait.

This crate binds the raw OpenGL entry points through the `gl` crate and
implements `nova_gl::novagl::GlDriver` on top of them. The host supplies a
procedure-address resolver from its windowing library (the equivalent of
`glfwGetProcAddress`); the GL context must already be current when
[`OpenGlDriver::from_loader`] is called and for every driver call after it.

## Example

```no_run
use nova_gl::novagl::RenderCore;
use nova_gl_driver_opengl::OpenGlDriver;

# fn get_proc_address(_name: &str) -> *const std::os::raw::c_void { std::ptr::null() }
RenderCore::initialize()?;
let driver = OpenGlDriver::from_loader(|name| get_proc_address(name));
RenderCore::create_driver(driver)?;
# Ok::<(), nova_gl::novagl::Error>(())
```
*/

// OpenGL implementation modules
mod conversions;
mod opengl_driver;

pub use opengl_driver::OpenGlDriver;
