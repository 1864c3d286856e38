
mod test_analytic;
