#[cfg(test)]
mod env_file {
    mod integration;
}
