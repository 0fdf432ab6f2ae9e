mod reductions;
