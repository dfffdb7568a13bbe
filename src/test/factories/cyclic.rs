//! A descriptor whose hierarchy loops back on itself.

use std::sync::{Arc, OnceLock};

use crate::metadata::{
    method::{MethodBuilder, MethodRc},
    typesystem::{TypeAttributes, TypeDescriptor, TypeRc, TypeSignature},
};

#[derive(Debug)]
struct CyclicType {
    name: &'static str,
    parents: OnceLock<Vec<TypeRc>>,
    methods: Vec<MethodRc>,
    constructors: Vec<MethodRc>,
}

impl TypeDescriptor for CyclicType {
    fn namespace(&self) -> &str {
        "test"
    }

    fn name(&self) -> &str {
        self.name
    }

    fn flags(&self) -> TypeAttributes {
        TypeAttributes::PUBLIC
    }

    fn base(&self) -> Option<TypeRc> {
        None
    }

    fn interfaces(&self) -> &[TypeRc] {
        self.parents.get().map_or(&[], Vec::as_slice)
    }

    fn methods(&self) -> &[MethodRc] {
        &self.methods
    }

    fn constructors(&self) -> &[MethodRc] {
        &self.constructors
    }
}

fn declared(builder: MethodBuilder) -> MethodRc {
    let mut method = builder.build();
    method.declaring_type = "test.First".to_string();
    Arc::new(method)
}

/// Two public classes `test.First` and `test.Second`, each listing both as interfaces.
///
/// `test.First` has a public no-arg constructor and an annotated `setPort(int)`. The
/// `Arc` cycle is never freed.
pub fn cyclic_pair() -> TypeRc {
    let first = Arc::new(CyclicType {
        name: "First",
        parents: OnceLock::new(),
        methods: vec![declared(
            MethodBuilder::setter("Port", TypeSignature::I4).config("port"),
        )],
        constructors: vec![declared(MethodBuilder::constructor())],
    });
    let second = Arc::new(CyclicType {
        name: "Second",
        parents: OnceLock::new(),
        methods: Vec::new(),
        constructors: Vec::new(),
    });

    let parents: Vec<TypeRc> = vec![first.clone() as TypeRc, second.clone() as TypeRc];
    first.parents.set(parents.clone()).unwrap();
    second.parents.set(parents).unwrap();
    first
}
