#[macro_use]
mod common;

#[cfg(test)]
mod bool {
    tests! {
        truthiness in bool is OK
        "zero is truthy"
        "empty is truthy"
        "null is falsy"
        "false is falsy"
    }

    tests! {
        not in bool is OK
        "false"
        "true"
        "true"
        "false"
        "false"
    }
}
