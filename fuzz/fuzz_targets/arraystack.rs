#![no_main]
use arbitrary::Arbitrary;
use arraystack::{ArrayStack, StackError};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
enum Action {
    Push(String),
    Pop,
    Peek,
    Get(usize),
    Set(usize, String),
}

use self::Action::*;

fuzz_target!(|input: (u8, Vec<Action>)| {
    let mut stack = ArrayStack::new(input.0 as usize);
    let mut model: Vec<String> = Vec::new();
    for action in input.1 {
        match action {
            Push(value) => {
                let full = stack.size() == stack.capacity();
                let capacity = stack.capacity();
                stack.push(value.clone());
                model.push(value);
                if full {
                    assert_eq!((capacity * 2).max(1), stack.capacity());
                }
            }
            Pop => {
                let capacity = stack.capacity();
                let expected = model.pop();
                let shrinks = expected.is_some() && capacity >= 3 * model.len();
                assert_eq!(expected.ok_or(StackError::EmptyStack), stack.pop());
                if shrinks {
                    assert_eq!(capacity / 2, stack.capacity());
                } else {
                    assert_eq!(capacity, stack.capacity());
                }
            }
            Peek => {
                assert_eq!(model.last().ok_or(StackError::EmptyStack), stack.peek());
            }
            Get(index) => {
                assert_eq!(model.get(index).is_some(), stack.get(index).is_ok());
            }
            Set(index, value) => {
                let result = stack.set(index, value.clone());
                if let Some(slot) = model.get_mut(index) {
                    assert_eq!(Ok(std::mem::replace(slot, value)), result);
                } else {
                    assert!(result.is_err());
                }
            }
        }
        assert!(stack.size() <= stack.capacity());
        assert_eq!(model.len(), stack.size());
    }
});
