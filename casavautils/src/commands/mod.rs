pub mod bcl_to_fastq;
