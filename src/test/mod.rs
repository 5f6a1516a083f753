mod run_compressor;
