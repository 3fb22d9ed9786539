// BitLabQ landing page - browser entry point (built by trunk with `--features csr`)

#[cfg(feature = "csr")]
fn main() {
    bitlabq_landing::mount();
}

// Without `csr` there is no browser to mount into; static pages come from
// `bitlabq-prerender` instead.
#[cfg(not(feature = "csr"))]
fn main() {}
