//! Factory methods for configuration types used across unit tests.

mod cyclic;
mod monitor;

pub use cyclic::cyclic_pair;
pub use monitor::RecordingMonitor;

use crate::metadata::{
    method::MethodBuilder,
    typesystem::{TypeBuilder, TypeRc, TypeSignature},
};

/// Adds `getPort()` and `setPort(int)`, both annotated with `port`.
pub fn port_accessors(builder: TypeBuilder) -> TypeBuilder {
    builder
        .method(MethodBuilder::getter("Port", TypeSignature::I4).config("port"))
        .method(MethodBuilder::setter("Port", TypeSignature::I4).config("port"))
}

/// A valid configuration type with two attributes.
///
/// `com.example.ServerConfig` with a public no-arg constructor, an annotated `Port`
/// getter/setter pair and a `Host` setter carrying a description and an alias.
pub fn server_config() -> TypeRc {
    port_accessors(TypeBuilder::class("com.example", "ServerConfig"))
        .default_constructor()
        .method(MethodBuilder::getter("Host", TypeSignature::String))
        .method(
            MethodBuilder::setter("Host", TypeSignature::String)
                .config("server.host")
                .deprecated_config(["host"])
                .description("Interface to bind"),
        )
        .build()
        .unwrap()
}

/// A class sitting on a ladder of `levels` interface diamonds.
///
/// Level `i` holds interfaces `LeftI` and `RightI`, each extending both interfaces of level
/// `i + 1`, so the number of distinct paths doubles per level. Only `Left{levels - 1}`
/// carries an annotation, on an abstract `setPort(int)`; the class `test.Ladder`
/// implements both level 0 interfaces and declares `setPort(int)` itself.
pub fn diamond_ladder(levels: usize) -> TypeRc {
    let rung = |side: &str, level: usize, parents: &[TypeRc]| {
        parents
            .iter()
            .fold(
                TypeBuilder::interface("test", &format!("{side}{level}")),
                |builder, parent| builder.implements(parent.clone()),
            )
    };

    let top = levels - 1;
    let mut pair = [
        rung("Left", top, &[])
            .method(
                MethodBuilder::setter("Port", TypeSignature::I4)
                    .abstract_method()
                    .config("port"),
            )
            .build()
            .unwrap(),
        rung("Right", top, &[]).build().unwrap(),
    ];
    for level in (0..top).rev() {
        pair = [
            rung("Left", level, &pair).build().unwrap(),
            rung("Right", level, &pair).build().unwrap(),
        ];
    }

    let [left, right] = pair;
    TypeBuilder::class("test", "Ladder")
        .default_constructor()
        .implements(left)
        .implements(right)
        .method(MethodBuilder::setter("Port", TypeSignature::I4))
        .build()
        .unwrap()
}
