use std::collections::BTreeMap;

use saltwrap_api::{Error, Result};

use super::Value;
use crate::{auth, hash, secretbox};

type Entry = fn(&[&[u8]]) -> Result<Value>;

/// A fixed-arity host function
#[derive(Clone, Copy)]
pub struct Function {
    name: &'static str,
    params: &'static [&'static str],
    entry: Entry,
}

impl Function {
    const fn new(name: &'static str, params: &'static [&'static str], entry: Entry) -> Self {
        Self {
            name,
            params,
            entry,
        }
    }

    /// Function name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Number of arguments the function takes
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// Argument names, in order
    pub fn params(&self) -> &'static [&'static str] {
        self.params
    }

    fn invoke(&self, args: &[Value]) -> Result<Value> {
        if args.len() != self.arity() {
            return Err(Error::param(
                self.name,
                format!(
                    "wrong number of arguments (given {}, expected {})",
                    args.len(),
                    self.arity()
                ),
            ));
        }

        let mut bytes = Vec::with_capacity(args.len());
        for (arg, &param) in args.iter().zip(self.params) {
            let b = arg.as_bytes().ok_or(Error::TypeMismatch {
                context: param,
                expected: "String",
                found: arg.type_name(),
            })?;
            bytes.push(b);
        }

        (self.entry)(&bytes)
    }
}

impl core::fmt::Debug for Function {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Function")
            .field("name", &self.name)
            .field("params", &self.params)
            .finish()
    }
}

/// A named group of constants and functions
#[derive(Debug, Clone)]
pub struct Module {
    name: &'static str,
    constants: BTreeMap<&'static str, Value>,
    functions: BTreeMap<&'static str, Function>,
}

impl Module {
    fn new(name: &'static str) -> Self {
        Self {
            name,
            constants: BTreeMap::new(),
            functions: BTreeMap::new(),
        }
    }

    fn constant(mut self, name: &'static str, value: Value) -> Self {
        self.constants.insert(name, value);
        self
    }

    fn function(mut self, function: Function) -> Self {
        self.functions.insert(function.name, function);
        self
    }

    /// Module path below the root namespace
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Look up a constant
    pub fn get_constant(&self, name: &str) -> Option<&Value> {
        self.constants.get(name)
    }

    /// Look up a function
    pub fn get_function(&self, name: &str) -> Option<&Function> {
        self.functions.get(name)
    }

    /// Constant names, sorted
    pub fn constant_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.constants.keys().copied()
    }

    /// Function names, sorted
    pub fn function_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.functions.keys().copied()
    }
}

/// Every module the adapter exposes to the host
#[derive(Debug, Clone)]
pub struct Registry {
    modules: BTreeMap<&'static str, Module>,
}

impl Registry {
    /// Namespace every module is registered under
    pub const ROOT: &'static str = "Cryptography::NaCl";

    /// Look up a module by its path below [`Self::ROOT`]
    pub fn module(&self, name: &str) -> Option<&Module> {
        self.modules.get(name)
    }

    /// Module paths, sorted
    pub fn module_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.modules.keys().copied()
    }

    /// Look up a constant of a module
    pub fn constant(&self, module: &str, name: &str) -> Option<&Value> {
        self.module(module)?.get_constant(name)
    }

    /// Call `module.function(args...)`
    ///
    /// Arity is checked first, then every argument must be a byte string;
    /// only then do the invoker's own length checks run.
    pub fn call(&self, module: &str, function: &str, args: &[Value]) -> Result<Value> {
        let m = self
            .module(module)
            .ok_or_else(|| Error::param("host call", format!("undefined module {}", module)))?;
        let f = m.get_function(function).ok_or_else(|| {
            Error::param(
                "host call",
                format!("undefined function {}.{}", module, function),
            )
        })?;
        f.invoke(args)
    }
}

/// Entry point that registers the adapter with the host
#[derive(Debug, Clone, Copy)]
pub struct NaCl;

impl NaCl {
    /// Build the module table
    pub fn init() -> Registry {
        let modules = [secretbox_module(), auth_module(), hash_module()]
            .into_iter()
            .map(|m| (m.name, m))
            .collect();
        Registry { modules }
    }
}

fn int(n: usize) -> Value {
    Value::Int(n as i64)
}

fn secretbox_module() -> Module {
    Module::new("SecretBox")
        .constant("PRIMITIVE", Value::symbol(secretbox::PRIMITIVE))
        .constant("KEY_LEN", int(secretbox::KEY_LEN))
        .constant("NONCE_LEN", int(secretbox::NONCE_LEN))
        .constant("MAC_LEN", int(secretbox::MAC_LEN))
        .function(Function::new(
            "secretbox",
            &["message", "nonce", "key"],
            |a| secretbox::secretbox(a[0], a[1], a[2]).map(Value::Bytes),
        ))
        .function(Function::new(
            "secretbox_open",
            &["ciphertext", "nonce", "key"],
            |a| secretbox::secretbox_open(a[0], a[1], a[2]).map(Value::Bytes),
        ))
}

fn auth_module() -> Module {
    Module::new("Auth::HMACSHA512256")
        .constant("PRIMITIVE", Value::symbol(auth::PRIMITIVE))
        .constant("KEY_LEN", int(auth::KEY_LEN))
        .constant("HMAC_LEN", int(auth::HMAC_LEN))
        .function(Function::new("auth", &["message", "key"], |a| {
            auth::auth(a[0], a[1]).map(Value::Bytes)
        }))
        .function(Function::new(
            "auth_verify",
            &["authenticator", "message", "key"],
            |a| auth::auth_verify(a[0], a[1], a[2]).map(Value::Bool),
        ))
}

fn hash_module() -> Module {
    Module::new("Hash::SHA512")
        .constant("PRIMITIVE", Value::symbol(hash::PRIMITIVE))
        .constant("HASH_LEN", int(hash::HASH_LEN))
        .function(Function::new("digest", &["message"], |a| {
            hash::digest(a[0]).map(Value::Bytes)
        }))
}
