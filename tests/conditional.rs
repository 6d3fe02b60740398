#[macro_use]
mod common;

#[cfg(test)]
mod conditional {
    tests! {
        basic in conditional is OK
        "yes"
        "no"
    }

    tests! {
        right_associative in conditional is OK
        "3"
        "1"
    }

    tests! {
        short_circuit in conditional is OK
        "1"
        "1"
    }

    tests! {
        truthiness in conditional is OK
        "truthy"
    }

    tests! {
        precedence in conditional is OK
        "t"
        "math works"
    }

    tests! {
        missing_colon in conditional is ERR
        "[line 1] Error at ';': Expect ':' after expression"
    }
}
