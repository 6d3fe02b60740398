#[macro_use]
mod common;

#[cfg(test)]
mod _while {
    tests! {
        count in while is OK
        "0"
        "1"
        "2"
    }

    tests! {
        break_inside in while is OK
        "0"
        "1"
        "2"
    }

    tests! {
        continue_inside in while is OK
        "1"
        "3"
        "4"
        "5"
    }

    tests! {
        nested in while is OK
        "0"
        "1"
    }

    tests! {
        condition_false in while is OK
        "done"
    }
}
