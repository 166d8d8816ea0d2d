mod convolution;
