#![allow(clippy::excessive_precision)]

mod quaternion;
