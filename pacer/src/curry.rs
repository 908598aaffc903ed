// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Currying of fixed-arity functions into chains of unary functions.
//!
//! Each link takes exactly one argument; `curry3(f)(a)(b)(c)` calls
//! `f(a, b, c)`. Supplying several arguments to one link is not supported.
//!
//! Intermediate links can be kept and reused to build specialised functions,
//! which is why every argument captured before the last one must be `Clone`.
//!
//! ```
//! use pacer::curry3;
//!
//! fn volume(l: u32, w: u32, h: u32) -> u32 {
//!     l * w * h
//! }
//!
//! assert_eq!(curry3(volume)(2)(3)(4), 24);
//!
//! let base_2_by_3 = curry3(volume)(2)(3);
//! assert_eq!(base_2_by_3(4), 24);
//! assert_eq!(base_2_by_3(5), 30);
//! ```

use std::rc::Rc;

/// A boxed unary function, the building block of every curried chain.
pub type Unary<A, R> = Box<dyn Fn(A) -> R>;

/// Curry a binary function.
pub fn curry2<A, B, R, F>(f: F) -> impl Fn(A) -> Unary<B, R>
where
    F: Fn(A, B) -> R + 'static,
    A: Clone + 'static,
    B: 'static,
    R: 'static,
{
    let f = Rc::new(f);
    move |a: A| {
        let f = Rc::clone(&f);
        Box::new(move |b: B| f(a.clone(), b)) as Unary<B, R>
    }
}

/// Curry a ternary function.
pub fn curry3<A, B, C, R, F>(f: F) -> impl Fn(A) -> Unary<B, Unary<C, R>>
where
    F: Fn(A, B, C) -> R + 'static,
    A: Clone + 'static,
    B: Clone + 'static,
    C: 'static,
    R: 'static,
{
    let f = Rc::new(f);
    move |a: A| {
        let f = Rc::clone(&f);
        Box::new(move |b: B| {
            let f = Rc::clone(&f);
            let a = a.clone();
            Box::new(move |c: C| f(a.clone(), b.clone(), c)) as Unary<C, R>
        }) as Unary<B, Unary<C, R>>
    }
}

/// Curry a function of four arguments.
pub fn curry4<A, B, C, D, R, F>(f: F) -> impl Fn(A) -> Unary<B, Unary<C, Unary<D, R>>>
where
    F: Fn(A, B, C, D) -> R + 'static,
    A: Clone + 'static,
    B: Clone + 'static,
    C: Clone + 'static,
    D: 'static,
    R: 'static,
{
    let f = Rc::new(f);
    move |a: A| {
        let f = Rc::clone(&f);
        Box::new(move |b: B| {
            let f = Rc::clone(&f);
            let a = a.clone();
            Box::new(move |c: C| {
                let f = Rc::clone(&f);
                let a = a.clone();
                let b = b.clone();
                Box::new(move |d: D| f(a.clone(), b.clone(), c.clone(), d)) as Unary<D, R>
            }) as Unary<C, Unary<D, R>>
        }) as Unary<B, Unary<C, Unary<D, R>>>
    }
}
