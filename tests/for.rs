#[macro_use]
mod common;

#[cfg(test)]
mod _for {
    tests! {
        basic in for is OK
        "0"
        "1"
        "2"
    }

    tests! {
        no_clauses in for is OK
        "0"
        "1"
    }

    tests! {
        expression_initializer in for is OK
        "0"
        "1"
        "2"
    }

    tests! {
        scoped_initializer in for is OK
        "0"
        "global"
    }

    tests! {
        closure_sees_loop_variable in for is OK
        "3"
    }

    tests! {
        return_inside in for is OK
        "0"
    }
}
